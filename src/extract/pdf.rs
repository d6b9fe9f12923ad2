//! Texto de páginas PDF convertido en un documento XML sintético.

use std::path::Path;
use std::sync::LazyLock;

use lopdf::Document;
use regex::Regex;
use tracing::debug;

use super::output::OutputDocument;
use crate::canon::{Element, canonicalize_element};
use crate::error::ExtractError;

/// Nombre fijo del XML generado a partir de un PDF.
pub const PDF_OUTPUT_NAME: &str = "pdf__extracted_text.xml";

static INNER_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("patrón de espacios válido"));

/// Lee el PDF y devuelve el XML canónico con su texto, página a página.
pub fn extract_pdf_document(path: &Path) -> Result<OutputDocument, ExtractError> {
    let pages = read_pdf_pages(path)?;
    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let bytes = canonicalize_element(build_page_document(&source, &pages)).map_err(|e| {
        ExtractError::Canon {
            name: PDF_OUTPUT_NAME.to_string(),
            source: e,
        }
    })?;

    Ok(OutputDocument::Canonical {
        name: PDF_OUTPUT_NAME.to_string(),
        bytes,
    })
}

/// Devuelve el texto de cada página, en orden, como una lista de líneas.
pub fn read_pdf_pages(path: &Path) -> Result<Vec<Vec<String>>, ExtractError> {
    let pdf_error = |message: String| ExtractError::Pdf {
        path: path.to_path_buf(),
        message,
    };

    let doc = Document::load(path).map_err(|e| pdf_error(e.to_string()))?;
    let mut pages = Vec::new();
    for number in doc.get_pages().into_keys() {
        let text = doc
            .extract_text(&[number])
            .map_err(|e| pdf_error(format!("página {number}: {e}")))?;
        pages.push(text.lines().map(str::to_string).collect());
    }
    debug!(pages = pages.len(), "texto PDF extraído");
    Ok(pages)
}

/// Colapsa los espacios y tabuladores internos y recorta los extremos.
pub fn clean_line(line: &str) -> Option<String> {
    let cleaned = INNER_WHITESPACE.replace_all(line, " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Construye `<pdf source=".."><page index="N"><line>..</line></page></pdf>`.
///
/// Una línea con saltos internos se divide; las que quedan vacías se omiten.
pub fn build_page_document(source: &str, pages: &[Vec<String>]) -> Element {
    let mut root = Element::new("pdf");
    root.set_attribute("source", source);

    for (index, lines) in pages.iter().enumerate() {
        let mut page = Element::new("page");
        page.set_attribute("index", index.to_string());

        for raw in lines {
            let raw = raw.replace("\r\n", "\n");
            for text in raw.split('\n').filter_map(clean_line) {
                let mut line = Element::new("line");
                line.text = Some(text);
                page.children.push(line);
            }
        }
        root.children.push(page);
    }
    root
}
