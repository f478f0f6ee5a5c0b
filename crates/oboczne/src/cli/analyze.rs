use std::path::Path;

use anyhow::{Context, Result};
use oboczne_core::{analyze_texts, read_dictionary, read_document, AnalysisOptions, Report};

use super::OutputFormat;

pub fn run(
    dictionary: &Path,
    document: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    options: &AnalysisOptions,
) -> Result<()> {
    options.validate()?;
    let dict_text = read_dictionary(dictionary)?;
    let document_text = read_document(document)?;

    let (groups, results) = analyze_texts(&dict_text, &document_text, options)?;
    tracing::info!(
        "Found {} co-occurring groups out of {} in {}",
        results.len(),
        groups.len(),
        document.display()
    );

    let report = Report::new(groups.len(), results);
    let rendered = match format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => report.to_json()? + "\n",
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to save report to {}", path.display()))?;
            eprintln!("Wyniki zostały zapisane: {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
