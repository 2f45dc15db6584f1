//! Lesson Request Dispatcher
//!
//! `LessonAgent` holds one immutable persona and one executor. Each call to
//! `generate_lesson` builds a task from the request, submits it exactly once
//! and wraps the returned text in a `LessonResult`.

use crate::{
    lesson::{LessonParameters, LessonResult},
    llm_client::{AgentExecutor, GeminiConfig, OpenAICompatibleExecutor},
    task::{AgentProfile, LessonTask},
};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub struct LessonAgent {
    profile: AgentProfile,
    executor: Arc<dyn AgentExecutor>,
}

impl LessonAgent {
    /// Creates an agent around any executor, using the lesson creator persona.
    pub fn new(executor: Arc<dyn AgentExecutor>) -> Self {
        Self::with_profile(AgentProfile::lesson_creator(), executor)
    }

    pub fn with_profile(profile: AgentProfile, executor: Arc<dyn AgentExecutor>) -> Self {
        Self { profile, executor }
    }

    /// Creates an agent backed by the Gemini chat completion API.
    ///
    /// A `GeminiConfig` only exists with a non-blank credential, so a missing
    /// key fails before the agent is built.
    pub fn with_gemini(config: GeminiConfig) -> Self {
        Self::new(Arc::new(OpenAICompatibleExecutor::new(config)))
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    /// Generates one lesson. Executor failures are returned unchanged.
    pub async fn generate_lesson(&self, params: &LessonParameters) -> Result<LessonResult> {
        let task = LessonTask::for_params(params);
        info!(
            target_language = %params.target_language,
            proficiency_level = %params.proficiency_level,
            lesson_focus = %params.lesson_focus,
            "Dispatching lesson task"
        );

        let content = self.executor.submit(&self.profile, &task).await?;

        info!(chars = content.len(), "Lesson content received");
        Ok(LessonResult::new(params, content))
    }

    /// Validates an untyped request, then generates the lesson.
    pub async fn generate_lesson_from_value(&self, request: Value) -> Result<LessonResult> {
        let params = LessonParameters::from_value(request)?;
        self.generate_lesson(&params).await
    }
}
