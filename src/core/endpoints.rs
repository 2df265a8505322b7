use crate::domain::model::ModelChoice;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

pub const DEFAULT_BASE_URL: &str =
    "https://aiCandidateScreening.us-east-2.elasticbeanstalk.com/api/predict-candidates";

const XGBOOST_SUFFIX: &str = "/XGboost";
const SPACY_SUFFIX: &str = "/spacy";

/// Static model -> URL table. One fixed URL per model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    neural_net: String,
    xgboost: String,
    spacy_similarity: String,
}

impl EndpointTable {
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            neural_net: base.to_string(),
            xgboost: format!("{}{}", base, XGBOOST_SUFFIX),
            spacy_similarity: format!("{}{}", base, SPACY_SUFFIX),
        }
    }

    pub fn endpoint_for(&self, model: ModelChoice) -> &str {
        match model {
            ModelChoice::NeuralNet => &self.neural_net,
            ModelChoice::XGBoost => &self.xgboost,
            ModelChoice::SpacySimilarity => &self.spacy_similarity,
        }
    }

    pub fn set_endpoint(&mut self, model: ModelChoice, url: impl Into<String>) {
        let slot = match model {
            ModelChoice::NeuralNet => &mut self.neural_net,
            ModelChoice::XGBoost => &mut self.xgboost,
            ModelChoice::SpacySimilarity => &mut self.spacy_similarity,
        };
        *slot = url.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModelChoice, &str)> + '_ {
        ModelChoice::ALL
            .into_iter()
            .map(move |model| (model, self.endpoint_for(model)))
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Validate for EndpointTable {
    fn validate(&self) -> Result<()> {
        validate_url("endpoints.neural_net", &self.neural_net)?;
        validate_url("endpoints.xgboost", &self.xgboost)?;
        validate_url("endpoints.spacy_similarity", &self.spacy_similarity)?;
        Ok(())
    }
}
