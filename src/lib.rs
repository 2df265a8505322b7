pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod session;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, ScreeningSettings};
pub use core::{
    backend::HttpScoringBackend,
    client::{FetchOutcome, ResultStatus, ScreeningClient, ScreeningState},
    endpoints::EndpointTable,
};
pub use domain::model::{Candidate, ModelChoice, ScoringRequest, ScoringResponse};
pub use report::OutputFormat;
pub use session::ScreeningSession;
pub use utils::error::{Result, ScreeningError};
