//! Demo learner profile used by the `lesson` binary.

use crate::lesson::LessonParameters;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Age group assumed for demo learners.
pub const DEMO_AGE_GROUP: &str = "adult";

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Demo profile has no entries in '{0}'")]
    Empty(&'static str),
}

/// A learner profile as stored in a demo JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoProfile {
    pub target_language: String,
    pub source_language: String,
    pub proficiency_level: String,
    pub preferred_topics: Vec<String>,
    pub learning_goals: Vec<String>,
    pub syllabus_description: String,
}

impl Default for DemoProfile {
    fn default() -> Self {
        Self {
            target_language: "Spanish".to_string(),
            source_language: "English".to_string(),
            proficiency_level: "beginner".to_string(),
            preferred_topics: vec![
                "greetings and introductions".to_string(),
                "ordering food".to_string(),
                "asking for directions".to_string(),
            ],
            learning_goals: vec![
                "hold a short conversation when meeting someone new".to_string(),
                "understand a restaurant menu".to_string(),
            ],
            syllabus_description: "everyday life in Mexico City and Madrid".to_string(),
        }
    }
}

impl DemoProfile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read demo profile {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse demo profile {}", path.display()))
    }

    /// Builds lesson parameters from the first topic and the first goal.
    pub fn to_lesson_parameters(&self) -> Result<LessonParameters, DemoError> {
        let lesson_focus = self
            .preferred_topics
            .first()
            .ok_or(DemoError::Empty("preferred_topics"))?;
        let learning_goals = self
            .learning_goals
            .first()
            .ok_or(DemoError::Empty("learning_goals"))?;

        Ok(LessonParameters {
            target_language: self.target_language.clone(),
            primary_language: self.source_language.clone(),
            proficiency_level: self.proficiency_level.clone(),
            lesson_focus: lesson_focus.clone(),
            learning_goals: learning_goals.clone(),
            cultural_context: self.syllabus_description.clone(),
            age_group: DEMO_AGE_GROUP.to_string(),
            previous_performance: None,
        })
    }
}
