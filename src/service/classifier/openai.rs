use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use crate::base::{
    config::Config,
    types::{Res, SeverityAssessment},
};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::responses::{
        Content, CreateResponseArgs, Input, InputItem, InputMessageArgs, OutputContent, Response, ResponseFormatJsonSchema, Role, TextConfig, TextResponseFormat,
    },
};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use super::{ClassifierClient, GenericClassifierClient};

// Extra methods on `ClassifierClient` applied by the openai implementation.

impl ClassifierClient {
    pub fn openai(config: &Config) -> Self {
        let client = OpenAiClassifierClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// OpenAI classifier client implementation.
#[derive(Clone)]
pub struct OpenAiClassifierClient {
    client: Client<OpenAIConfig>,
    config: Config,
}

impl OpenAiClassifierClient {
    /// Create a new OpenAI classifier client.
    #[instrument(name = "OpenAiClassifierClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let cfg = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());

        Self {
            client: Client::with_config(cfg),
            config: config.clone(),
        }
    }

    /// Build the classifier input: just the complaint text as the user message.
    #[instrument(name = "OpenAiClassifierClient::build_input", skip_all)]
    fn build_input(&self, text: &str) -> Res<Input> {
        Ok(Input::Items(vec![InputItem::Message(
            InputMessageArgs::default()
                .role(Role::User)
                .content(format!("Complaint: \"{text}\""))
                .build()?,
        )]))
    }

    /// Make a single OpenAI API call with an explicit timeout.
    ///
    /// No retries: a failed or timed-out call is reported to the caller, which
    /// substitutes the fallback assessment.
    async fn call_openai_api(&self, request_builder: CreateResponseArgs) -> Res<Response> {
        let request = request_builder.build()?;
        let call_timeout = Duration::from_secs(self.config.classifier_timeout_secs);

        match timeout(call_timeout, self.client.responses().create(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => Err(anyhow::anyhow!("OpenAI API call failed: {err}")),
            Err(_) => Err(anyhow::anyhow!("OpenAI API call timed out after {} seconds", self.config.classifier_timeout_secs)),
        }
    }
}

#[async_trait]
impl GenericClassifierClient for OpenAiClassifierClient {
    #[instrument(name = "OpenAiClassifierClient::assess", skip_all)]
    async fn assess(&self, text: &str) -> Res<SeverityAssessment> {
        let input = self.build_input(text)?;

        let text_config = get_openai_text_config().clone();

        // Create the request.
        let mut request = CreateResponseArgs::default();
        request
            .instructions(self.config.classifier_prompt.clone())
            .max_output_tokens(self.config.openai_max_tokens)
            .model(&self.config.openai_classifier_model)
            .text(text_config)
            .input(input);

        // Add the temperature for the non-reasoning models.
        if self.config.openai_classifier_model.starts_with("gpt") {
            request.temperature(self.config.openai_classifier_temperature);
        }

        let response = self.call_openai_api(request).await?;

        parse_classifier_response(&response)
    }
}

/// Parse the OpenAI response into a severity assessment.
#[instrument(skip_all)]
pub fn parse_classifier_response(response: &Response) -> Res<SeverityAssessment> {
    info!("Classifier response has {} outputs.", response.output.len());

    for output in &response.output {
        match output {
            OutputContent::Message(message) => {
                for message_content in &message.content {
                    match message_content {
                        Content::OutputText(text) => return parse_assessment_json(&text.text),
                        Content::Refusal(reason) => {
                            return Err(anyhow::anyhow!("Request refused: {reason:#?}"));
                        }
                    }
                }
            }
            _ => {
                warn!("Unknown output: {output:#?}");
            }
        }
    }

    Err(anyhow::anyhow!("Classifier response contained no message output."))
}

/// Parse the raw model text into the expected `{severity, reasoning}` shape.
pub fn parse_assessment_json(text: &str) -> Res<SeverityAssessment> {
    serde_json::from_str::<SeverityAssessment>(text).map_err(|err| anyhow::anyhow!("Unparseable classifier reply: {err}"))
}

// Statics.

static OPENAI_TEXT_CONFIG: OnceLock<TextConfig> = OnceLock::new();

fn get_openai_text_config() -> &'static TextConfig {
    OPENAI_TEXT_CONFIG.get_or_init(|| TextConfig {
        format: TextResponseFormat::JsonSchema(ResponseFormatJsonSchema {
            name: "SeverityAssessment".to_string(),
            description: Some("Severity score and short reasoning for a complaint.".to_string()),
            schema: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "severity": { "type": "integer" },
                    "reasoning": { "type": "string" }
                },
                "required": ["severity", "reasoning"],
                "additionalProperties": false
            })),
            strict: Some(true),
        }),
    })
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::types::{FALLBACK_REASONING, FALLBACK_SEVERITY};

    #[test]
    fn test_parse_assessment_json_valid() {
        let assessment = parse_assessment_json(r#"{ "severity": 8, "reasoning": "Outage with revenue impact" }"#).unwrap();

        assert_eq!(assessment.severity, 8);
        assert_eq!(assessment.reasoning, "Outage with revenue impact");
    }

    #[test]
    fn test_parse_assessment_json_missing_field() {
        let result = parse_assessment_json(r#"{ "severity": 8 }"#);

        assert!(result.is_err(), "Reply without reasoning should not parse");
    }

    #[test]
    fn test_parse_assessment_json_not_json() {
        let result = parse_assessment_json("I would rate this an 8 out of 10.");

        assert!(result.is_err(), "Prose reply should not parse");
    }

    #[test]
    fn test_fallback_assessment_shape() {
        let fallback = SeverityAssessment::fallback();

        assert_eq!(fallback.severity, FALLBACK_SEVERITY as i64);
        assert_eq!(fallback.reasoning, FALLBACK_REASONING);
    }

    #[test]
    fn test_out_of_range_severity_clamps() {
        let high = parse_assessment_json(r#"{ "severity": 15, "reasoning": "Model got excited" }"#).unwrap();
        let low = parse_assessment_json(r#"{ "severity": -2, "reasoning": "Model got confused" }"#).unwrap();

        assert_eq!(high.clamped_severity(), 10);
        assert_eq!(low.clamped_severity(), 1);
    }
}
