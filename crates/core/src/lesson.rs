//! Lesson request and result records.
//!
//! `LessonParameters` describes a learner and the lesson they want;
//! `LessonResult` pairs a copy of the identifying parameters with the opaque
//! text produced by the remote model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields that must be present in every lesson request.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "target_language",
    "primary_language",
    "proficiency_level",
    "lesson_focus",
    "learning_goals",
    "cultural_context",
    "age_group",
];

/// Failures raised while turning untyped input into `LessonParameters`.
#[derive(Debug, thiserror::Error)]
pub enum ParameterError {
    #[error("Missing lesson parameter: {0}")]
    MissingField(String),
    #[error("Invalid lesson parameters: {0}")]
    Invalid(String),
}

/// Input record for a single lesson request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonParameters {
    /// The language being learned (e.g., "Spanish").
    pub target_language: String,
    /// The learner's own language, used for explanations.
    pub primary_language: String,
    /// Free-form level such as "beginner", "intermediate" or "advanced".
    pub proficiency_level: String,
    pub lesson_focus: String,
    pub learning_goals: String,
    pub cultural_context: String,
    pub age_group: String,
    /// Accepted for callers that track learner history. Not read anywhere yet.
    #[serde(default)]
    pub previous_performance: Option<Value>,
}

impl LessonParameters {
    /// Converts a JSON object into lesson parameters.
    ///
    /// Required keys are checked one by one so a missing key is reported by
    /// name rather than as a generic deserialization failure.
    pub fn from_value(value: Value) -> Result<Self, ParameterError> {
        let object = value
            .as_object()
            .ok_or_else(|| ParameterError::Invalid("expected a JSON object".to_string()))?;

        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|field| !object.contains_key(**field))
        {
            return Err(ParameterError::MissingField(missing.to_string()));
        }

        serde_json::from_value(value).map_err(|e| ParameterError::Invalid(e.to_string()))
    }
}

/// The subset of `LessonParameters` echoed back alongside generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonMetadata {
    pub target_language: String,
    pub primary_language: String,
    pub proficiency_level: String,
    pub lesson_focus: String,
    pub age_group: String,
}

impl From<&LessonParameters> for LessonMetadata {
    fn from(params: &LessonParameters) -> Self {
        Self {
            target_language: params.target_language.clone(),
            primary_language: params.primary_language.clone(),
            proficiency_level: params.proficiency_level.clone(),
            lesson_focus: params.lesson_focus.clone(),
            age_group: params.age_group.clone(),
        }
    }
}

/// Output record of a lesson request. `content` is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonResult {
    pub metadata: LessonMetadata,
    pub content: String,
}

impl LessonResult {
    pub fn new(params: &LessonParameters, content: impl Into<String>) -> Self {
        Self {
            metadata: LessonMetadata::from(params),
            content: content.into(),
        }
    }
}
