//! Process command - extract a record from a single OCR text dump.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use dnicr_core::error::{DnicrError, OcrError};
use dnicr_core::extract::DniParser;
use dnicr_core::models::config::DnicrConfig;
use dnicr_core::models::record::DniRecord;
use dnicr_core::LayeredDniParser;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file: recognized text lines in reading order, one per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show unresolved-field warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    if text.trim().is_empty() {
        // The recognition stage handed over nothing; relay its error as-is.
        return Err(DnicrError::Ocr(OcrError::NoText).into());
    }

    let parser = LayeredDniParser::new().with_config(config.extraction);
    let result = parser.parse(&text).map_err(DnicrError::from)?;

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Unresolved fields:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<DnicrConfig> {
    Ok(match config_path {
        Some(path) => DnicrConfig::from_file(Path::new(path))?,
        None => DnicrConfig::default(),
    })
}

pub(crate) fn format_record(record: &DniRecord, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Text => format_record_text(record),
    })
}

fn format_record_text(record: &DniRecord) -> String {
    let mut output = String::new();
    let dash = || "-".to_string();

    output.push_str(&format!("{}: {}\n", record.document_type, record.national_id));
    output.push_str(&format!(
        "Name: {}\n",
        record.full_name.clone().unwrap_or_else(dash)
    ));
    output.push_str(&format!(
        "Born: {}",
        record.birth_date.clone().unwrap_or_else(dash)
    ));
    if let Some(age) = record.age {
        output.push_str(&format!(" (age {})", age));
    }
    output.push('\n');
    output.push_str(&format!(
        "Sex: {}\n",
        record
            .sex_label
            .clone()
            .unwrap_or_else(dash)
    ));
    output.push_str(&format!(
        "Marital status: {}\n",
        record
            .marital_status
            .map(|m| m.label().to_string())
            .unwrap_or_else(dash)
    ));

    output
}
