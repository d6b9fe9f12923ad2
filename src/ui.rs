use console::style;

use canonxml::batch::ExtractionEvent;
use canonxml::report::ExtractionReport;

const HEADER_WIDTH: usize = 74;

pub fn render_header() {
    let border = "─".repeat(HEADER_WIDTH - 2);
    println!("\n{}", style(format!("┌{}┐", border)).cyan());
    println!(
        "{}",
        style(format!(
            "│ {:^inner_width$} │",
            "▸ canonxml · XML canónico para comparar documentos ◂",
            inner_width = HEADER_WIDTH - 4
        ))
        .cyan()
        .bold()
    );
    println!("{}\n", style(format!("└{}┘", border)).cyan());
}

pub fn render_event(event: &ExtractionEvent) {
    match event {
        ExtractionEvent::Started { total } => {
            println!("{}", style(format!("│ Archivos a procesar: {total}")).dim());
        }
        ExtractionEvent::Processing { index, total, path } => {
            println!(
                "\n{}",
                style(format!("┌─ [{index}/{total}] {}", path.display())).cyan()
            );
        }
        ExtractionEvent::Success { report } => render_report(report),
        ExtractionEvent::Failure { error, .. } => {
            println!("{}", style(format!("│ Error: {error}")).red());
            println!("{}", style("└─").red());
        }
        ExtractionEvent::Finished {
            successes,
            failures,
        } => {
            let summary = format!("Completados: {successes} · Fallidos: {failures}");
            if *failures == 0 {
                println!("\n{}", style(summary).green().bold());
            } else {
                println!("\n{}", style(summary).yellow().bold());
            }
        }
    }
}

fn render_report(report: &ExtractionReport) {
    for file in &report.files {
        let line = format!("│   • {}", file.name);
        if file.raw {
            let reason = file.reason.as_deref().unwrap_or("XML no válido");
            println!("{}", style(format!("{line} (sin normalizar: {reason})")).yellow());
        } else {
            println!("{}", style(line).green());
        }
    }
    println!(
        "{}",
        style(format!(
            "│ Guardados {} XML en {}",
            report.files.len(),
            report.outdir.display()
        ))
        .green()
        .bold()
    );
    println!("{}", style("└─").green());
}
