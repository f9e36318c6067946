use std::path::Path;

use crate::commands::{extractor_for, load_analyzer};
use crate::output;
use crate::OutputFormat;

pub fn run(
    input_file: &Path,
    output_format: OutputFormat,
    config: Option<&Path>,
) -> Result<(), pensum_core::error::PensumError> {
    let analyzer = load_analyzer(config)?;
    let extractor = extractor_for(input_file);
    let text = pensum_core::extract_document(input_file, extractor.as_ref())?;
    let segmentation = analyzer.segmentation(&text);

    match output_format {
        OutputFormat::Json => output::json::print(&segmentation)?,
        OutputFormat::Table => output::table::print_segmentation(&segmentation),
    }

    Ok(())
}
