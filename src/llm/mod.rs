//! Prompt construction and the completion service.

pub mod client;
pub mod generator;
pub mod prompt;

pub use client::{CompletionRequest, CompletionService, OpenAiClient};
pub use generator::{ChangelogGenerator, NO_COMMITS_MESSAGE};
pub use prompt::{build_prompt, truncate_diff, MAX_DIFF_LINES, SYSTEM_INSTRUCTION};
