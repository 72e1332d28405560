//! External model verdict provider.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint over HTTP and
//! validates the completion through [`parse_model_report`]. The override
//! table is consulted before any network call so the fixed demo claims
//! resolve identically under every provider.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use veritas_core::error::CoreError;
use veritas_core::overrides::{default_overrides, OverrideRule};
use veritas_core::provider::{parse_model_report, RuleBasedProvider, VerdictProvider};
use veritas_core::verdict::{CheckKind, VerdictReport};

use crate::config::{ModelConfig, ProviderKind, ServerConfig};

/// Build the verdict provider selected by server configuration.
pub fn build_provider(config: &ServerConfig) -> Arc<dyn VerdictProvider> {
    match config.provider {
        ProviderKind::Rules => Arc::new(RuleBasedProvider::new()),
        ProviderKind::Model => {
            let model = config
                .model
                .clone()
                .expect("model provider selected without MODEL_* settings");
            Arc::new(ExternalModelProvider::new(model))
        }
    }
}

/// Verdict provider backed by an external chat-completion model.
pub struct ExternalModelProvider {
    client: reqwest::Client,
    config: ModelConfig,
    overrides: Vec<OverrideRule>,
}

impl ExternalModelProvider {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            overrides: default_overrides(),
        }
    }

    fn build_prompt(&self, content: &str, kind: CheckKind, region: &str) -> String {
        let subject = match kind {
            CheckKind::Url => "news article URL",
            CheckKind::Text => "news claim",
        };
        format!(
            "You are Veritas, a rigorous fact-checking assistant. Assess the \
             authenticity of the following {subject}. The reader is located in \
             {region}; weigh regional outlets accordingly.\n\n\
             Content: {content}\n\n\
             Respond with ONLY a JSON object in this exact shape:\n\
             {{\"result\": \"real\" | \"fake\" | \"uncertain\", \
             \"confidence\": <0-100>, \
             \"sources\": [<outlet names>], \
             \"analysis\": \"<two or three sentences>\"}}"
        )
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl VerdictProvider for ExternalModelProvider {
    async fn evaluate(
        &self,
        content: &str,
        kind: CheckKind,
        region: &str,
    ) -> Result<VerdictReport, CoreError> {
        let lowered = content.trim().to_lowercase();
        if let Some(rule) = self.overrides.iter().find(|r| r.matches(&lowered)) {
            return Ok(rule.report());
        }

        let prompt = self.build_prompt(content, kind, region);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.1,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CoreError::Processing(format!("Model request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(CoreError::Processing(format!(
                "Model endpoint returned status {}",
                response.status()
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Processing(format!("Malformed model response: {e}")))?;

        let raw = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| CoreError::Processing("Model returned no choices".to_string()))?;

        parse_model_report(raw)
    }

    fn name(&self) -> &'static str {
        "model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::verdict::Verdict;

    fn test_provider() -> ExternalModelProvider {
        ExternalModelProvider::new(ModelConfig {
            api_url: "http://localhost:9/unreachable".to_string(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        })
    }

    #[tokio::test]
    async fn overrides_short_circuit_the_network_call() {
        // The endpoint is unreachable, so an override hit is the only way
        // this can succeed.
        let provider = test_provider();
        let report = provider
            .evaluate("5G network causes cancer", CheckKind::Text, "Global")
            .await
            .unwrap();
        assert_eq!(report.result, Verdict::Fake);
        assert_eq!(report.confidence, 100);
        assert_eq!(report.sources, vec!["Verified Database".to_string()]);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_processing_error() {
        let provider = test_provider();
        let err = provider
            .evaluate("some novel claim", CheckKind::Text, "Global")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Processing(_)));
    }

    #[test]
    fn prompt_carries_content_and_region() {
        let provider = test_provider();
        let prompt = provider.build_prompt("dollar rallies", CheckKind::Text, "India");
        assert!(prompt.contains("dollar rallies"));
        assert!(prompt.contains("India"));
        assert!(prompt.contains("\"result\""));
    }
}
