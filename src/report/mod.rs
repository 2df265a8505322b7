use crate::domain::model::{format_score, Candidate, ScoringResponse};
use crate::utils::error::{Result, ScreeningError};
use serde::{Deserialize, Serialize};

pub const EMPTY_MESSAGE: &str = "No candidates to display.";
pub const HEADING: &str = "Top Candidates";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

pub fn render(candidates: &[Candidate], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(candidates)),
        OutputFormat::Json => render_json(candidates),
        OutputFormat::Csv => render_delimited(candidates, b','),
        OutputFormat::Tsv => render_delimited(candidates, b'\t'),
    }
}

pub fn render_text(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut out = format!("{}\n", HEADING);
    for candidate in candidates {
        out.push_str("  ");
        out.push_str(&candidate.display_line());
        out.push('\n');
    }
    out
}

fn render_json(candidates: &[Candidate]) -> Result<String> {
    let response = ScoringResponse::new(candidates.to_vec());
    let mut json = serde_json::to_string_pretty(&response)?;
    json.push('\n');
    Ok(json)
}

fn render_delimited(candidates: &[Candidate], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["Name", "Score"])?;
    for candidate in candidates {
        let score = format_score(candidate.score);
        writer.write_record([candidate.name.as_str(), score.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScreeningError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ScreeningError::ConfigError {
        message: format!("rendered output is not UTF-8: {}", e),
    })
}
