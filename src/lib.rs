//! Extracción de XML de documentos Office, ODF y PDF en forma canónica, lista
//! para comparar dos revisiones de un mismo documento con un diff de bytes.

pub mod batch;
pub mod canon;
pub mod error;
pub mod extract;
pub mod logging;
pub mod report;

pub use canon::canonicalize_xml_bytes;
pub use error::{CanonError, ExtractError};
pub use extract::extract_xmls;
pub use report::{ExtractionReport, SavedFile};
