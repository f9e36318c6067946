use pensum_core::model::ProblemRecord;
use std::path::{Path, PathBuf};

use crate::commands::{extractor_for, has_extension, load_analyzer};
use crate::output;
use crate::OutputFormat;

pub fn run(
    input_file: &Path,
    output_format: OutputFormat,
    output_file: Option<PathBuf>,
    config: Option<&Path>,
    show_steps: bool,
) -> Result<(), pensum_core::error::PensumError> {
    let analyzer = load_analyzer(config)?;

    let report = if has_extension(input_file, "json") {
        // Pre-segmented problems
        if !input_file.exists() {
            return Err(pensum_core::error::PensumError::InputNotFound(
                input_file.to_path_buf(),
            ));
        }
        let json_bytes = std::fs::read(input_file)?;
        let records: Vec<ProblemRecord> = serde_json::from_slice(&json_bytes)?;
        analyzer.analyze_records(&records)
    } else {
        let extractor = extractor_for(input_file);
        pensum_core::analyze_pdf(input_file, extractor.as_ref(), &analyzer, None)?
    };

    if report.summary.total_problems == 0 {
        eprintln!("No problems found in {}", input_file.display());
    }

    match output_file {
        Some(path) => {
            output::json::write(&report, &path)?;
            eprintln!(
                "Analyzed {} problem(s), written to {}",
                report.summary.total_problems,
                path.display()
            );
        }
        None => match output_format {
            OutputFormat::Json => output::json::print(&report)?,
            OutputFormat::Table => output::table::print_report(&report, show_steps),
        },
    }

    Ok(())
}
