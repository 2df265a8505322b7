use crate::domain::model::{ScoringRequest, ScoringResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A remote service that ranks candidates for a job description.
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    async fn score(&self, endpoint: &str, request: &ScoringRequest) -> Result<ScoringResponse>;
}

#[async_trait]
impl<T: ScoringBackend + ?Sized> ScoringBackend for std::sync::Arc<T> {
    async fn score(&self, endpoint: &str, request: &ScoringRequest) -> Result<ScoringResponse> {
        (**self).score(endpoint, request).await
    }
}
