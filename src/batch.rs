//! Procesamiento por lotes con eventos de progreso.
//!
//! Pensado para ejecutarse en un hilo aparte: quien consume los eventos puede
//! soltar el receptor para desentenderse del resto del lote.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use walkdir::WalkDir;

use crate::error::ExtractError;
use crate::extract::{SourceKind, extract_xmls};
use crate::report::ExtractionReport;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ExtractionEvent {
    Started { total: usize },
    Processing { index: usize, total: usize, path: PathBuf },
    Success { report: ExtractionReport },
    Failure { path: PathBuf, error: String },
    Finished { successes: usize, failures: usize },
}

/// Expande directorios en la lista ordenada de archivos soportados.
///
/// Las rutas de archivo se conservan tal cual aunque no existan o su formato
/// no esté soportado, para que el fallo se informe al procesarlas sin detener
/// el resto del lote.
pub fn collect_inputs(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, ExtractError> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        for entry in WalkDir::new(path).max_depth(max_depth).sort_by_file_name() {
            let entry = entry.map_err(|e| ExtractError::io(path, e.into()))?;
            if entry.file_type().is_file() && SourceKind::from_path(entry.path()).is_supported() {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

/// Procesa cada archivo y emite eventos; un fallo no detiene el lote.
pub fn run_extraction_with_sender(
    files: Vec<PathBuf>,
    base_outdir: &Path,
    sender: Sender<ExtractionEvent>,
) -> (usize, usize) {
    let total = files.len();
    let _ = sender.send(ExtractionEvent::Started { total });

    let mut successes = 0_usize;
    let mut failures = 0_usize;

    for (index, path) in files.into_iter().enumerate() {
        let _ = sender.send(ExtractionEvent::Processing {
            index: index + 1,
            total,
            path: path.clone(),
        });

        match extract_xmls(&path, base_outdir) {
            Ok(report) => {
                successes += 1;
                let _ = sender.send(ExtractionEvent::Success { report });
            }
            Err(error) => {
                failures += 1;
                let _ = sender.send(ExtractionEvent::Failure {
                    path,
                    error: error.to_string(),
                });
            }
        }
    }

    let _ = sender.send(ExtractionEvent::Finished {
        successes,
        failures,
    });
    (successes, failures)
}
