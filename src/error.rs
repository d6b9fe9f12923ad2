//! Tipos de error de la canonicalización y de la extracción.

use std::path::PathBuf;
use thiserror::Error;

/// Fallos al convertir un documento XML a su forma canónica.
#[derive(Debug, Error)]
pub enum CanonError {
    /// El contenido no es XML bien formado.
    #[error("XML mal formado en la posición {position}: {message}")]
    Parse { position: u64, message: String },

    /// El contenido no está codificado en UTF-8.
    #[error("el XML no está codificado en UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    /// No hay elemento raíz.
    #[error("el documento no contiene un elemento raíz")]
    NoRoot,

    /// El árbol no se pudo escribir.
    #[error("no se pudo serializar el XML canónico: {0}")]
    Serialization(String),
}

impl CanonError {
    pub(crate) fn parse(position: u64, message: impl Into<String>) -> Self {
        CanonError::Parse {
            position,
            message: message.into(),
        }
    }
}

/// Fallos que abortan la extracción de un archivo de entrada completo.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// La extensión no corresponde a ningún formato soportado.
    #[error("Formato {extension} no soportado para extracción de XML")]
    UnsupportedFormat { extension: String },

    /// CSV y texto plano no llevan XML que extraer.
    #[error("Para archivos {extension} no se contempla extracción de XML")]
    PlainTextFormat { extension: String },

    /// Ningún miembro del manifiesto existe en el archivo.
    #[error(
        "No se encontraron XML significativos dentro de {} (estructura inesperada)",
        path.display()
    )]
    NoSignificantContent { path: PathBuf },

    /// El archivo no es un ZIP legible.
    #[error("No es un documento Office válido ({}): {source}", path.display())]
    InvalidArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// El PDF no se pudo leer.
    #[error("No se pudo leer el PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    /// Error de lectura o escritura en disco.
    #[error("Error de E/S en {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Un documento que no admite copia en bruto no se pudo canonicalizar.
    #[error("No se pudo normalizar {name}: {source}")]
    Canon {
        name: String,
        #[source]
        source: CanonError,
    },
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
