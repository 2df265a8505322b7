use crate::core::endpoints::EndpointTable;
use crate::domain::model::{Candidate, ModelChoice, ScoringRequest};
use crate::domain::ports::ScoringBackend;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// What the last applied fetch produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultStatus {
    #[default]
    NotRequested,
    Ready,
    FetchFailed { reason: String },
}

/// Everything the screening form renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningState {
    pub job_description: String,
    pub candidates: Vec<Candidate>,
    pub loading: bool,
    pub selected_model: ModelChoice,
    pub status: ResultStatus,
    latest_ticket: u64,
}

impl ScreeningState {
    pub fn display_lines(&self) -> Vec<String> {
        self.candidates.iter().map(Candidate::display_line).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded { count: usize },
    Failed { reason: String },
    /// A newer fetch was issued before this one resolved; its response was dropped.
    Superseded,
}

/// Owns the form state and runs one scoring call per fetch.
///
/// Every fetch takes a ticket. Only the response to the most recent ticket
/// is applied, so overlapping fetches never leave an older result on screen.
pub struct ScreeningClient<B: ScoringBackend> {
    backend: B,
    endpoints: EndpointTable,
    state: Mutex<ScreeningState>,
}

impl<B: ScoringBackend> ScreeningClient<B> {
    pub fn new(backend: B, endpoints: EndpointTable) -> Self {
        Self {
            backend,
            endpoints,
            state: Mutex::new(ScreeningState::default()),
        }
    }

    pub fn with_model(self, model: ModelChoice) -> Self {
        self.state().selected_model = model;
        self
    }

    fn state(&self) -> MutexGuard<'_, ScreeningState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    pub fn set_job_description(&self, text: impl Into<String>) {
        self.state().job_description = text.into();
    }

    pub fn set_selected_model(&self, choice: ModelChoice) {
        self.state().selected_model = choice;
    }

    pub fn clear_candidates(&self) {
        let mut state = self.state();
        state.candidates.clear();
        state.status = ResultStatus::NotRequested;
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    pub fn selected_model(&self) -> ModelChoice {
        self.state().selected_model
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.state().candidates.clone()
    }

    pub fn display_lines(&self) -> Vec<String> {
        self.state().display_lines()
    }

    pub fn snapshot(&self) -> ScreeningState {
        self.state().clone()
    }

    pub async fn fetch_candidates(&self) -> FetchOutcome {
        let (ticket, endpoint, request) = {
            let mut state = self.state();
            state.latest_ticket += 1;
            state.loading = true;
            (
                state.latest_ticket,
                self.endpoints.endpoint_for(state.selected_model).to_string(),
                ScoringRequest::new(state.job_description.clone()),
            )
        };

        tracing::info!("Requesting candidates from {}", endpoint);
        let result = self.backend.score(&endpoint, &request).await;

        let mut state = self.state();
        if state.latest_ticket != ticket {
            match &result {
                Err(e) => tracing::warn!(
                    "Dropping failed response for request #{} (latest is #{}): {}",
                    ticket,
                    state.latest_ticket,
                    e
                ),
                Ok(_) => tracing::debug!(
                    "Dropping response for request #{} (latest is #{})",
                    ticket,
                    state.latest_ticket
                ),
            }
            return FetchOutcome::Superseded;
        }

        state.loading = false;
        match result {
            Ok(response) => {
                state.candidates = response.into_candidates();
                state.status = ResultStatus::Ready;
                tracing::info!("Received {} candidates", state.candidates.len());
                FetchOutcome::Loaded {
                    count: state.candidates.len(),
                }
            }
            Err(e) => {
                tracing::error!("Error fetching candidates: {}", e);
                tracing::warn!("{}", e.recovery_suggestion());
                let reason = e.to_string();
                state.candidates.clear();
                state.status = ResultStatus::FetchFailed {
                    reason: reason.clone(),
                };
                FetchOutcome::Failed { reason }
            }
        }
    }
}
