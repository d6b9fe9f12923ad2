//! Resumen serializable de lo que se guardó para cada archivo de entrada.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Un XML guardado en el directorio de salida.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFile {
    pub name: String,
    /// `true` si se copiaron los bytes originales sin normalizar.
    pub raw: bool,
    /// SHA-256 en hexadecimal de los bytes guardados.
    pub sha256: String,
    /// Error de lectura que obligó a guardar el miembro en bruto.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SavedFile {
    pub fn new(name: impl Into<String>, raw: bool, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            raw,
            sha256: format!("{:x}", Sha256::digest(bytes)),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: Option<&str>) -> Self {
        self.reason = reason.map(str::to_string);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub input: PathBuf,
    pub outdir: PathBuf,
    pub files: Vec<SavedFile>,
}

impl ExtractionReport {
    pub fn saved_names(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.name.as_str()).collect()
    }

    pub fn raw_count(&self) -> usize {
        self.files.iter().filter(|file| file.raw).count()
    }
}
