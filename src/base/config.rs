//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::Res;

/// Default OpenAI classifier model to use
fn default_openai_classifier_model() -> String {
    "gpt-4.1-mini".to_string()
}

/// Default sampling temperature for the classifier
fn default_openai_classifier_temperature() -> f32 {
    0.0
}

/// Default max output tokens for the classifier
fn default_openai_max_tokens() -> u32 {
    256
}

/// Default timeout, in seconds, for a single classifier call
fn default_classifier_timeout_secs() -> u64 {
    30
}

/// Default rubric prompt for the classifier.
fn default_classifier_prompt() -> String {
    prompts::CLASSIFIER_PROMPT.to_string()
}

/// Configuration for the complaint-triage application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Shared inner configuration values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Configuration values for the complaint-triage application.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// OpenAI API key (`OPENAI_API_KEY`).
    pub openai_api_key: String,
    /// OpenAI classifier model to use (`OPENAI_CLASSIFIER_MODEL`).
    #[serde(default = "default_openai_classifier_model")]
    pub openai_classifier_model: String,
    /// Optional custom rubric prompt to override the default (`CLASSIFIER_PROMPT`).
    #[serde(default = "default_classifier_prompt")]
    pub classifier_prompt: String,
    /// Sampling temperature to use for the classifier model
    /// (`OPENAI_CLASSIFIER_TEMPERATURE`). Value between 0 and 2; scoring should
    /// be deterministic, so the default is 0.
    #[serde(default = "default_openai_classifier_temperature")]
    pub openai_classifier_temperature: f32,
    /// Max output tokens for the classifier model (`OPENAI_MAX_TOKENS`).
    /// The reply is two small fields, so this stays small.
    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,
    /// Timeout in seconds for a single classifier call (`CLASSIFIER_TIMEOUT_SECS`).
    /// On expiry the call counts as a classifier failure and intake falls back.
    #[serde(default = "default_classifier_timeout_secs")]
    pub classifier_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the environment and an optional config file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("COMPLAINT_TRIAGE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.openai_classifier_temperature < 0.0 || result.openai_classifier_temperature > 2.0 {
            return Err(anyhow::anyhow!("OpenAI classifier temperature must be between 0 and 2."));
        }

        if result.openai_max_tokens < 1 || result.openai_max_tokens > 128000 {
            return Err(anyhow::anyhow!("OpenAI max tokens must be between 1 and 128000."));
        }

        if result.classifier_timeout_secs < 1 {
            return Err(anyhow::anyhow!("Classifier timeout must be at least 1 second."));
        }

        Ok(result)
    }
}
