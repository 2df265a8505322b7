use crate::core::endpoints::{EndpointTable, DEFAULT_BASE_URL};
use crate::domain::model::ModelChoice;
use crate::utils::error::{Result, ScreeningError};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_TIMEOUT_SECONDS: u64 = 600;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub base_url: Option<String>,
    pub neural_net: Option<String>,
    pub xgboost: Option<String>,
    pub spacy_similarity: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub timeout_seconds: Option<u64>,
    pub default_model: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScreeningError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScreeningError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScreeningError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn endpoint_table(&self) -> EndpointTable {
        let base = self.endpoints.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let mut table = EndpointTable::with_base_url(base);

        let overrides = [
            (ModelChoice::NeuralNet, &self.endpoints.neural_net),
            (ModelChoice::XGBoost, &self.endpoints.xgboost),
            (ModelChoice::SpacySimilarity, &self.endpoints.spacy_similarity),
        ];
        for (model, url) in overrides {
            if let Some(url) = url {
                table.set_endpoint(model, url.clone());
            }
        }
        table
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.client.timeout_seconds.map(Duration::from_secs)
    }

    pub fn default_model(&self) -> Result<ModelChoice> {
        match &self.client.default_model {
            Some(name) => name.parse(),
            None => Ok(ModelChoice::default()),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base) = &self.endpoints.base_url {
            validate_url("endpoints.base_url", base)?;
        }
        self.endpoint_table().validate()?;

        if let Some(timeout) = self.client.timeout_seconds {
            validate_range("client.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        self.default_model()?;
        Ok(())
    }
}
