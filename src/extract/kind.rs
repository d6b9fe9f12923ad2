//! Selección del tipo de fuente a partir de la extensión del archivo.

use std::path::Path;

/// Formatos ofimáticos empaquetados en ZIP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfficeKind {
    WordProcessor,
    Spreadsheet,
    OpenDocumentText,
    OpenDocumentSheet,
}

/// Tipo de fuente, decidido una sola vez al entrar en la extracción.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Office(OfficeKind),
    PaginatedText,
    /// CSV o texto plano: no contienen XML que extraer.
    PlainText(String),
    Unsupported(String),
}

const PLAIN_TEXT_EXTENSIONS: &[&str] = &["csv", "txt"];

impl SourceKind {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "docx" => SourceKind::Office(OfficeKind::WordProcessor),
            "xlsx" => SourceKind::Office(OfficeKind::Spreadsheet),
            "odt" => SourceKind::Office(OfficeKind::OpenDocumentText),
            "ods" => SourceKind::Office(OfficeKind::OpenDocumentSheet),
            "pdf" => SourceKind::PaginatedText,
            ext if PLAIN_TEXT_EXTENSIONS.contains(&ext) => SourceKind::PlainText(extension),
            _ => SourceKind::Unsupported(extension),
        }
    }

    /// Indica si la extracción puede producir XML para este tipo.
    pub fn is_supported(&self) -> bool {
        matches!(self, SourceKind::Office(_) | SourceKind::PaginatedText)
    }
}

/// Muestra la extensión tal y como la ve el usuario (`.xyz`, o `sin extensión`).
pub(crate) fn display_extension(extension: &str) -> String {
    if extension.is_empty() {
        "sin extensión".to_string()
    } else {
        format!(".{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_lowercased_extension() {
        assert_eq!(
            SourceKind::from_path(Path::new("Informe.DOCX")),
            SourceKind::Office(OfficeKind::WordProcessor)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("datos.xlsx")),
            SourceKind::Office(OfficeKind::Spreadsheet)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("a/b/c.odt")),
            SourceKind::Office(OfficeKind::OpenDocumentText)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("c.ods")),
            SourceKind::Office(OfficeKind::OpenDocumentSheet)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("scan.Pdf")),
            SourceKind::PaginatedText
        );
    }

    #[test]
    fn plain_text_and_unknown_extensions_are_not_supported() {
        let csv = SourceKind::from_path(Path::new("tabla.csv"));
        assert_eq!(csv, SourceKind::PlainText("csv".to_string()));
        assert!(!csv.is_supported());

        let pptx = SourceKind::from_path(Path::new("slides.pptx"));
        assert_eq!(pptx, SourceKind::Unsupported("pptx".to_string()));
        assert!(!SourceKind::from_path(Path::new("LEEME")).is_supported());
        assert_eq!(display_extension(""), "sin extensión");
        assert_eq!(display_extension("pptx"), ".pptx");
    }
}
