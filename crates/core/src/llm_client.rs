//! Executors that turn a `LessonTask` into generated text.

use crate::task::{AgentProfile, LessonTask};
use anyhow::{Context, Result};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
};
use async_trait::async_trait;
use tracing::{debug, info};

/// OpenAI-compatible base URL of the Gemini API.
pub const GEMINI_OPENAI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Missing API credential for the generative language service")]
    Missing,
}

/// Connection settings for the generative language service.
///
/// The credential lives here, owned by whichever executor is built from it.
#[derive(Clone)]
pub struct GeminiConfig {
    api_key: String,
    pub api_base: String,
    pub model: String,
}

impl GeminiConfig {
    /// Creates a config with the default base URL and model.
    ///
    /// Fails when the key is empty or only whitespace.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CredentialError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CredentialError::Missing);
        }
        Ok(Self {
            api_key,
            api_base: GEMINI_OPENAI_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

/// Runs a single lesson task against a language model.
///
/// Implementations make exactly one request per call and return the
/// aggregated text of the response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentExecutor: Send + Sync {
    async fn submit(&self, profile: &AgentProfile, task: &LessonTask) -> Result<String>;
}

/// An `AgentExecutor` for any OpenAI-compatible chat completion API.
pub struct OpenAICompatibleExecutor {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAICompatibleExecutor {
    pub fn new(config: GeminiConfig) -> Self {
        info!(model = %config.model, api_base = %config.api_base, "Configuring chat completion executor");
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key)
            .with_api_base(config.api_base);
        Self {
            client: Client::with_config(openai_config),
            model: config.model,
        }
    }
}

#[async_trait]
impl AgentExecutor for OpenAICompatibleExecutor {
    async fn submit(&self, profile: &AgentProfile, task: &LessonTask) -> Result<String> {
        let request = build_request(&self.model, profile, task)?;

        debug!(model = %self.model, description = %task.description, "Submitting lesson task");
        let response = self.client.chat().create(request).await?;

        extract_answer(response)
    }
}

/// Builds the chat request: the profile as the system message, the task as
/// the user message.
fn build_request(
    model: &str,
    profile: &AgentProfile,
    task: &LessonTask,
) -> Result<CreateChatCompletionRequest> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(model)
        .messages(vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(profile.system_prompt())
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(task.user_prompt())
                .build()?
                .into(),
        ])
        .build()?;
    Ok(request)
}

/// Returns the text of the first choice.
fn extract_answer(response: CreateChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .context("No response choice from LLM")?
        .message
        .content
        .context("No content in LLM response")
}

/// An `AgentExecutor` that always answers with the same text.
///
/// Used for offline runs and tests that must not reach the network.
pub struct CannedExecutor {
    response: String,
}

impl CannedExecutor {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl AgentExecutor for CannedExecutor {
    async fn submit(&self, _profile: &AgentProfile, task: &LessonTask) -> Result<String> {
        debug!(description = %task.description, "Answering lesson task with canned response");
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_rejects_blank_key() {
        assert!(matches!(GeminiConfig::new(""), Err(CredentialError::Missing)));
        assert!(matches!(
            GeminiConfig::new("   "),
            Err(CredentialError::Missing)
        ));
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let config = GeminiConfig::new("test-key").unwrap();
        assert_eq!(config.api_key(), "test-key");
        assert_eq!(config.api_base, GEMINI_OPENAI_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);

        let config = config
            .with_model("gemini-1.5-pro")
            .with_api_base("http://localhost:8080/v1");
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.api_base, "http://localhost:8080/v1");
    }

    #[test]
    fn test_config_debug_hides_key() {
        let config = GeminiConfig::new("super-secret").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    fn lesson_task() -> LessonTask {
        LessonTask {
            description: "Teach greetings.".to_string(),
            expected_output: "A short lesson.".to_string(),
        }
    }

    fn chat_response(choices: serde_json::Value) -> CreateChatCompletionResponse {
        serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 0,
            "model": "gemini-2.0-flash",
            "choices": choices
        }))
        .expect("valid chat completion response")
    }

    #[test]
    fn test_build_request_sends_system_then_user_message() {
        let profile = AgentProfile::lesson_creator();
        let task = lesson_task();

        let request = build_request("gemini-2.0-flash", &profile, &task).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gemini-2.0-flash");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], json!(profile.system_prompt()));
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], json!(task.user_prompt()));
    }

    #[test]
    fn test_extract_answer_returns_first_choice_text() {
        let response = chat_response(json!([
            {
                "index": 0,
                "message": { "role": "assistant", "content": "LESSON_OK" },
                "finish_reason": "stop"
            },
            {
                "index": 1,
                "message": { "role": "assistant", "content": "ignored" },
                "finish_reason": "stop"
            }
        ]));
        assert_eq!(extract_answer(response).unwrap(), "LESSON_OK");
    }

    #[test]
    fn test_extract_answer_rejects_empty_choices() {
        let err = extract_answer(chat_response(json!([]))).unwrap_err();
        assert_eq!(err.to_string(), "No response choice from LLM");
    }

    #[test]
    fn test_extract_answer_rejects_null_content() {
        let response = chat_response(json!([
            {
                "index": 0,
                "message": { "role": "assistant", "content": null },
                "finish_reason": "stop"
            }
        ]));
        let err = extract_answer(response).unwrap_err();
        assert_eq!(err.to_string(), "No content in LLM response");
    }

    #[tokio::test]
    async fn test_canned_executor_returns_response() {
        let executor = CannedExecutor::new("LESSON_OK");
        let task = LessonTask {
            description: "anything".to_string(),
            expected_output: "anything".to_string(),
        };
        let text = executor
            .submit(&AgentProfile::lesson_creator(), &task)
            .await
            .unwrap();
        assert_eq!(text, "LESSON_OK");
    }
}
