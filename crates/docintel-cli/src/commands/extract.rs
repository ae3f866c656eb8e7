//! Extract command - classify and extract fields from recognized text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use docintel_core::analyzer::analyze_text_with;
use docintel_core::{DocumentClassifier, KeywordScores};

use super::analyze::print_scores;
use super::load_config;
use super::output::{format_result, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file with OCR output ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Show classifier keyword scores
    #[arg(long)]
    show_scores: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    info!("Extracting fields from {} bytes of text", text.len());

    let classifier = DocumentClassifier::with_config(config.classifier);
    let result = analyze_text_with(&classifier, &text)?;

    let output = format_result(&result, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_scores {
        print_scores(&KeywordScores::of(result.raw_text.as_str()));
    }

    Ok(())
}
