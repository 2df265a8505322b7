pub mod backend;
pub mod client;
pub mod endpoints;

pub use crate::domain::model::{Candidate, ModelChoice, ScoringRequest, ScoringResponse};
pub use crate::domain::ports::ScoringBackend;
pub use crate::utils::error::Result;
