use crate::utils::error::ScreeningError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Body of every scoring call, built fresh from the current draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    #[serde(rename = "jobDescription")]
    pub job_description: String,
}

impl ScoringRequest {
    pub fn new(job_description: impl Into<String>) -> Self {
        Self {
            job_description: job_description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Score")]
    pub score: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// `"<Name> - Score: <score to 2 dp>"`
    pub fn display_line(&self) -> String {
        format!("{} - Score: {}", self.name, format_score(self.score))
    }
}

/// Two-decimal score text that rounds exact ties away from zero.
///
/// `{:.2}` already picks the nearest hundredth of the exact binary value; the
/// only disagreement is an exact tie, which `{:.2}` sends to the even digit.
/// A double sits exactly halfway between two hundredths only when it is an odd
/// multiple of 1/8, so those values are rounded up in magnitude here.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "NaN".to_string();
    }
    if score.is_infinite() {
        return if score > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if score < 0.0 { "-" } else { "" };
    let magnitude = score.abs();

    let eighths = magnitude * 8.0;
    if eighths.fract() == 0.0 && eighths < 9_007_199_254_740_992.0 && (eighths as u64) % 2 == 1 {
        let hundredths = ((eighths as u128) * 125 + 5) / 10;
        return format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100);
    }

    format!("{}{:.2}", sign, magnitude)
}

/// A 2xx body without `topCandidates` (or with `null`) decodes as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringResponse {
    #[serde(rename = "topCandidates", default)]
    top_candidates: Option<Vec<Candidate>>,
}

impl ScoringResponse {
    pub fn new(top_candidates: Vec<Candidate>) -> Self {
        Self {
            top_candidates: Some(top_candidates),
        }
    }

    pub fn top_candidates(&self) -> &[Candidate] {
        self.top_candidates.as_deref().unwrap_or_default()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.top_candidates.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "Neural Net")]
    #[cfg_attr(feature = "cli", value(name = "neural-net"))]
    NeuralNet,
    #[serde(rename = "XGBoost")]
    #[cfg_attr(feature = "cli", value(name = "xgboost"))]
    XGBoost,
    #[serde(rename = "Spacy Similarity")]
    #[cfg_attr(feature = "cli", value(name = "spacy-similarity"))]
    SpacySimilarity,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [
        ModelChoice::NeuralNet,
        ModelChoice::XGBoost,
        ModelChoice::SpacySimilarity,
    ];

    /// Label shown in the model dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::NeuralNet => "Neural Net",
            ModelChoice::XGBoost => "XGBoost",
            ModelChoice::SpacySimilarity => "Spacy Similarity",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelChoice {
    type Err = ScreeningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "neuralnet" => Ok(ModelChoice::NeuralNet),
            "xgboost" => Ok(ModelChoice::XGBoost),
            "spacysimilarity" | "spacy" => Ok(ModelChoice::SpacySimilarity),
            _ => Err(ScreeningError::InvalidModel {
                value: s.to_string(),
            }),
        }
    }
}
