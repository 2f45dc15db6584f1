//! Prompt construction for lesson requests.
//!
//! A lesson request is sent to the model as a `LessonTask` (an instruction
//! built from the learner's parameters plus a fixed description of the
//! expected lesson structure) on behalf of an `AgentProfile`.

use crate::lesson::LessonParameters;
use serde::{Deserialize, Serialize};

/// Structure every generated lesson is asked to follow. Independent of the
/// request parameters.
pub const EXPECTED_OUTPUT: &str = "A complete language lesson structured with:\n\
1. Introduction to the topic with clear explanations\n\
2. Vocabulary list with audio pronunciations\n\
3. Grammar explanations with examples\n\
4. Dialogue or text demonstrating the concepts\n\
5. Cultural notes relevant to the lesson\n\
6. Interactive practice exercises\n\
7. Summary and review points";

/// The identity the model is asked to adopt for every lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentProfile {
    /// The language lesson author persona.
    pub fn lesson_creator() -> Self {
        Self {
            role: "Language Lesson Creator".to_string(),
            goal: "Generate engaging, culturally appropriate language lessons tailored to the \
                   user's proficiency level and learning goals"
                .to_string(),
            backstory: "You are an expert language educator with deep knowledge of pedagogical \
                        approaches for second language acquisition. You specialize in creating \
                        multimodal learning materials that combine text, audio, images, and \
                        interactive exercises to maximize learning effectiveness."
                .to_string(),
        }
    }

    /// Renders the profile as a system prompt.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}. {} Your goal: {}",
            self.role, self.backstory, self.goal
        )
    }
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self::lesson_creator()
    }
}

/// One unit of work submitted to an `AgentExecutor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonTask {
    pub description: String,
    pub expected_output: String,
}

impl LessonTask {
    pub fn for_params(params: &LessonParameters) -> Self {
        Self {
            description: build_instruction(params),
            expected_output: EXPECTED_OUTPUT.to_string(),
        }
    }

    /// Renders the task as the user message sent to the model.
    pub fn user_prompt(&self) -> String {
        format!(
            "{}\n\nExpected output:\n{}",
            self.description, self.expected_output
        )
    }
}

/// Interpolates every required parameter into the lesson instruction.
pub fn build_instruction(params: &LessonParameters) -> String {
    format!(
        "Create a comprehensive language lesson for {} learners with {} proficiency. \
         The lesson should focus on {} and align with these learning goals: {}. \
         The learner's primary language is {} and they are in the {} age group. \
         Include culturally appropriate examples from {}.",
        params.target_language,
        params.proficiency_level,
        params.lesson_focus,
        params.learning_goals,
        params.primary_language,
        params.age_group,
        params.cultural_context,
    )
}
