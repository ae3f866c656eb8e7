//! Analyze command - run the full pipeline on a single document image.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use docintel_core::analyzer::{content_type_for_path, ensure_image_content_type};
use docintel_core::{DocumentAnalyzer, KeywordScores};

use super::load_config;
use super::output::{format_result, OutputFormat};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input image file
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

    /// Model directory (overrides configuration)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Show classifier keyword scores
    #[arg(long)]
    show_scores: bool,
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(model_dir) = &args.model_dir {
        config.ocr.model_dir = model_dir.clone();
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Analyzing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Checking input...");
    pb.set_position(10);
    let content_type = content_type_for_path(&args.input);
    debug!("Declared content type: {}", content_type);
    ensure_image_content_type(content_type)?;

    pb.set_message("Loading OCR models...");
    pb.set_position(25);
    if !config.ocr.models_present() {
        anyhow::bail!(
            "OCR models not found in {}.\n\n\
             Point 'ocr.model_dir' at a directory containing {}, {} and {} \
             (or pass --model-dir).",
            config.ocr.model_dir.display(),
            config.ocr.detection_model,
            config.ocr.recognition_model,
            config.ocr.dictionary
        );
    }
    let analyzer = DocumentAnalyzer::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to load OCR models: {}", e))?;

    pb.set_message("Running OCR and extraction...");
    pb.set_position(50);
    let result = analyzer.analyze_file(&args.input)?;

    pb.set_position(100);
    pb.finish_and_clear();

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

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn print_scores(scores: &KeywordScores) {
    eprintln!(
        "{} Keyword scores: invoice={} receipt={} identity_card={}",
        style("ℹ").blue(),
        scores.invoice,
        scores.receipt,
        scores.identity
    );
}
