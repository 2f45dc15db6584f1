use clap::Parser;
use lingua_core::{LessonParameters, demo::DemoProfile};
use std::path::PathBuf;

/// Generate a language lesson for a demo learner profile.
#[derive(Parser, Debug)]
#[command(name = "lesson", version, about)]
pub struct Args {
    /// JSON file with the learner profile. Uses the built-in profile when omitted.
    #[arg(long)]
    pub demo: Option<PathBuf>,

    /// Overrides the learner's age group.
    #[arg(long)]
    pub age_group: Option<String>,

    /// Overrides CHAT_MODEL.
    #[arg(long)]
    pub model: Option<String>,

    /// Answer with a fixed text instead of calling the remote model.
    #[arg(long)]
    pub offline: bool,
}

impl Args {
    /// Resolves the lesson parameters described by the arguments.
    pub fn lesson_parameters(&self) -> anyhow::Result<LessonParameters> {
        let profile = match &self.demo {
            Some(path) => DemoProfile::from_path(path)?,
            None => DemoProfile::default(),
        };
        let mut params = profile.to_lesson_parameters()?;
        if let Some(age_group) = &self.age_group {
            params.age_group = age_group.clone();
        }
        Ok(params)
    }
}
