//! Core logic for generating language lessons with a remote language model.

pub mod agent;
pub mod demo;
pub mod lesson;
pub mod llm_client;
pub mod task;

pub use agent::LessonAgent;
pub use lesson::{LessonMetadata, LessonParameters, LessonResult};
