//! Lesson Service Library Crate
//!
//! Environment configuration and command-line handling for the `lesson`
//! binary, which is a thin wrapper around this library and `lingua-core`.

pub mod cli;
pub mod config;
