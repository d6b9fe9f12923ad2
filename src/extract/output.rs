//! Directorio de salida y nombres planos para los XML extraídos.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Separador que sustituye a `/` al aplanar rutas de miembros.
pub const FLATTEN_SEPARATOR: &str = "__";

/// Sufijo de los miembros guardados sin normalizar.
pub const RAW_SUFFIX: &str = ".RAW.xml";

/// Resultado de un documento listo para guardarse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputDocument {
    /// XML en forma canónica.
    Canonical { name: String, bytes: Vec<u8> },
    /// Bytes originales de un miembro que no se pudo normalizar.
    Raw {
        name: String,
        bytes: Vec<u8>,
        reason: String,
    },
}

impl OutputDocument {
    pub fn name(&self) -> &str {
        match self {
            OutputDocument::Canonical { name, .. } | OutputDocument::Raw { name, .. } => name,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            OutputDocument::Canonical { bytes, .. } | OutputDocument::Raw { bytes, .. } => bytes,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, OutputDocument::Raw { .. })
    }

    /// Causa por la que el miembro no se pudo normalizar.
    pub fn reason(&self) -> Option<&str> {
        match self {
            OutputDocument::Canonical { .. } => None,
            OutputDocument::Raw { reason, .. } => Some(reason),
        }
    }
}

/// Convierte la ruta de un miembro del archivo en un nombre de fichero plano.
pub fn flatten_member_name(member: &str) -> String {
    member.replace(['/', '\\'], FLATTEN_SEPARATOR)
}

/// Nombre con el que se guarda un miembro copiado en bruto.
pub fn raw_member_name(member: &str) -> String {
    format!("{}{}", flatten_member_name(member), RAW_SUFFIX)
}

/// Crea (si falta) `<base>/<stem>_xml` y devuelve su ruta.
pub fn ensure_outdir(base_outdir: &Path, input_file: &Path) -> Result<PathBuf, ExtractError> {
    let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();
    let outdir = base_outdir.join(format!("{stem}_xml"));
    fs::create_dir_all(&outdir).map_err(|e| ExtractError::io(&outdir, e))?;
    Ok(outdir)
}

pub fn write_file(path: &Path, data: &[u8]) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ExtractError::io(parent, e))?;
    }
    fs::write(path, data).map_err(|e| ExtractError::io(path, e))
}
