//! Output formatting shared by the analysis commands.

use docintel_core::AnalysisResult;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per field)
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_result(result: &AnalysisResult, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &AnalysisResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["document_type", "field", "value"])?;
    for (field, value) in &result.fields {
        wtr.write_record([result.document_type.as_str(), field.as_str(), value.as_str()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document type: {}\n", result.document_type));
    output.push('\n');

    output.push_str("Fields:\n");
    if result.fields.is_empty() {
        output.push_str("  (none)\n");
    }
    for (field, value) in &result.fields {
        output.push_str(&format!("  {}: {}\n", field, value));
    }
    output.push('\n');

    output.push_str("Raw text:\n");
    for line in result.raw_text.as_str().lines() {
        output.push_str(&format!("  {}\n", line));
    }

    output
}
