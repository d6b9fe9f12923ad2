//! Extracción y normalización de los XML contenidos en documentos ZIP.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;

use super::kind::OfficeKind;
use super::manifest::resolve_manifest;
use super::output::{OutputDocument, flatten_member_name, raw_member_name};
use crate::canon::canonicalize_xml_bytes;
use crate::error::ExtractError;

/// Abre un documento ofimático en disco y normaliza sus miembros significativos.
pub fn extract_office_members(
    path: &Path,
    kind: OfficeKind,
) -> Result<Vec<OutputDocument>, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    read_office_archive(file, kind, path)
}

/// Igual que [`extract_office_members`] pero sobre cualquier lector con `Seek`.
///
/// Un miembro que no es XML válido no detiene el lote: se devuelve en bruto.
pub fn read_office_archive<R: Read + Seek>(
    reader: R,
    kind: OfficeKind,
    source: &Path,
) -> Result<Vec<OutputDocument>, ExtractError> {
    let invalid = |e: zip::result::ZipError| ExtractError::InvalidArchive {
        path: source.to_path_buf(),
        source: e,
    };

    let mut archive = ZipArchive::new(reader).map_err(invalid)?;

    let mut members = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let file = archive.by_index(i).map_err(invalid)?;
        if !file.is_dir() {
            members.push(file.name().to_string());
        }
    }

    let manifest = resolve_manifest(kind, &members);
    if manifest.is_empty() {
        return Err(ExtractError::NoSignificantContent {
            path: source.to_path_buf(),
        });
    }
    debug!(members = manifest.len(), "manifiesto resuelto");

    let mut documents = Vec::with_capacity(manifest.len());
    for member in manifest {
        let mut file = archive.by_name(&member).map_err(invalid)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| ExtractError::io(source.join(&member), e))?;

        let document = match canonicalize_xml_bytes(&contents) {
            Ok(bytes) => {
                debug!(member = %member, "miembro normalizado");
                OutputDocument::Canonical {
                    name: flatten_member_name(&member),
                    bytes,
                }
            }
            Err(error) => {
                warn!(member = %member, %error, "miembro guardado en bruto");
                OutputDocument::Raw {
                    name: raw_member_name(&member),
                    bytes: contents,
                    reason: error.to_string(),
                }
            }
        };
        documents.push(document);
    }

    Ok(documents)
}
