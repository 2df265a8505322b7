pub mod toml_config;

use crate::core::endpoints::EndpointTable;
use crate::domain::model::ModelChoice;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use std::time::Duration;
use toml_config::{TomlConfig, MAX_TIMEOUT_SECONDS};

#[cfg(feature = "cli")]
use crate::report::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

/// Resolved runtime settings: file values with command-line overrides applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningSettings {
    pub endpoints: EndpointTable,
    pub timeout: Option<Duration>,
    pub model: ModelChoice,
}

impl ScreeningSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            endpoints: config.endpoint_table(),
            timeout: config.timeout(),
            model: config.default_model()?,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoints = EndpointTable::with_base_url(base_url);
        self
    }
}

impl Validate for ScreeningSettings {
    fn validate(&self) -> Result<()> {
        self.endpoints.validate()?;
        if let Some(timeout) = self.timeout {
            validate_range(
                "timeout_seconds",
                timeout.as_secs(),
                1,
                MAX_TIMEOUT_SECONDS,
            )?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "candidate-screening")]
#[command(about = "Rank candidates for a job description using a remote scoring model")]
pub struct CliConfig {
    /// Job description text. Read from --job-file or stdin when omitted.
    pub job_description: Option<String>,

    /// Read the job description from a file
    #[arg(long, conflicts_with = "job_description")]
    pub job_file: Option<String>,

    /// Scoring model
    #[arg(short, long, value_enum)]
    pub model: Option<ModelChoice>,

    /// Base URL of the scoring API; model paths are appended to it
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout in seconds (1-600)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Start a line-driven screening session instead of a single request
    #[arg(short, long, conflicts_with_all = ["job_description", "job_file"])]
    pub interactive: bool,

    /// Exit non-zero when the scoring call fails
    #[arg(long)]
    pub fail_on_error: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and layers the flags on top.
    pub fn resolve_settings(&self) -> Result<ScreeningSettings> {
        let file_config = match &self.config {
            Some(path) => {
                crate::utils::validation::validate_path("config", path)?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut settings = ScreeningSettings::from_toml(&file_config)?;

        if let Some(base_url) = &self.base_url {
            settings = settings.with_base_url(base_url);
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout = Some(Duration::from_secs(timeout));
        }
        if let Some(model) = self.model {
            settings.model = model;
        }

        settings.validate()?;
        Ok(settings)
    }
}
