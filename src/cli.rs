//! Argumentos de línea de comandos.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "canonxml",
    version,
    about = "Extrae el XML de documentos DOCX/XLSX/ODT/ODS/PDF en forma canónica",
    long_about = "Extrae el XML de documentos DOCX/XLSX/ODT/ODS y el texto de PDF, \
                  elimina nodos y atributos volátiles, ordena atributos y guarda \
                  el resultado para compararlo byte a byte entre revisiones."
)]
pub struct Cli {
    /// Archivos o directorios a procesar.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directorio base de salida; cada archivo crea `<nombre>_xml` dentro.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = "extracted")]
    pub output_dir: PathBuf,

    /// Recorre subdirectorios de los directorios indicados.
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Imprime el resultado como JSON en lugar del listado en consola.
    #[arg(long = "json")]
    pub json: bool,

    /// Más detalle en el registro (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Solo errores en el registro.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Formato del registro.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
