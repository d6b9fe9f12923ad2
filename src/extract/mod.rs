//! Extracción de los XML de cada formato soportado y escritura a disco.

mod archive;
mod kind;
mod manifest;
mod output;
mod pdf;

pub use archive::{extract_office_members, read_office_archive};
pub use kind::{OfficeKind, SourceKind};
pub use manifest::{
    OPEN_DOCUMENT_MEMBERS, WORD_MEMBERS, WORKBOOK_MEMBERS, WORKBOOK_PART_DIRS, resolve_manifest,
};
pub use output::{
    FLATTEN_SEPARATOR, OutputDocument, RAW_SUFFIX, ensure_outdir, flatten_member_name,
    raw_member_name, write_file,
};
pub use pdf::{PDF_OUTPUT_NAME, build_page_document, clean_line, extract_pdf_document, read_pdf_pages};

use std::io;
use std::path::Path;

use tracing::{info, info_span};

use crate::error::ExtractError;
use crate::report::{ExtractionReport, SavedFile};
use kind::display_extension;

/// Extrae y normaliza los XML de `input` en `<base_outdir>/<stem>_xml`.
///
/// El directorio solo se crea cuando ya se sabe qué se va a guardar, de modo
/// que un formato no soportado o un manifiesto vacío no dejan nada en disco.
pub fn extract_xmls(input: &Path, base_outdir: &Path) -> Result<ExtractionReport, ExtractError> {
    let kind = SourceKind::from_path(input);
    let span = info_span!("extract", input = %input.display(), kind = ?kind);
    let _guard = span.enter();

    if kind.is_supported() && !input.is_file() {
        return Err(ExtractError::io(
            input,
            io::Error::new(io::ErrorKind::NotFound, "el archivo no existe"),
        ));
    }

    let documents = match kind {
        SourceKind::Office(office) => extract_office_members(input, office)?,
        SourceKind::PaginatedText => vec![extract_pdf_document(input)?],
        SourceKind::PlainText(extension) => {
            return Err(ExtractError::PlainTextFormat {
                extension: display_extension(&extension),
            });
        }
        SourceKind::Unsupported(extension) => {
            return Err(ExtractError::UnsupportedFormat {
                extension: display_extension(&extension),
            });
        }
    };

    let outdir = ensure_outdir(base_outdir, input)?;
    let mut files = Vec::with_capacity(documents.len());
    for document in &documents {
        write_file(&outdir.join(document.name()), document.bytes())?;
        files.push(
            SavedFile::new(document.name(), document.is_raw(), document.bytes())
                .with_reason(document.reason()),
        );
    }

    let report = ExtractionReport {
        input: input.to_path_buf(),
        outdir,
        files,
    };
    info!(
        saved = report.files.len(),
        raw = report.raw_count(),
        outdir = %report.outdir.display(),
        "extracción completada"
    );
    Ok(report)
}
