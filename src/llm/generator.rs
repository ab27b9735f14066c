//! Changelog text generation through a completion service.

use tracing::info;

use crate::changelog::CategorizedCommits;
use crate::error::CompletionError;

use super::client::{CompletionRequest, CompletionService};
use super::prompt::{build_prompt, SYSTEM_INSTRUCTION};

/// Returned instead of calling the service when there is nothing to describe.
pub const NO_COMMITS_MESSAGE: &str = "No commits to include in the changelog.";

/// Turns categorized commits into changelog Markdown.
pub struct ChangelogGenerator<S> {
    service: S,
    model: String,
}

impl<S: CompletionService> ChangelogGenerator<S> {
    pub fn new(service: S, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
        }
    }

    /// Generate changelog text in a single request. No retry.
    pub async fn generate(&self, categorized: &CategorizedCommits) -> Result<String, CompletionError> {
        if categorized.is_empty() {
            return Ok(NO_COMMITS_MESSAGE.to_string());
        }

        let request = CompletionRequest {
            system: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_prompt(categorized),
            model: self.model.clone(),
        };

        info!(model = %self.model, commits = categorized.len(), "Requesting changelog text");
        let text = self.service.complete(&request).await?;

        Ok(text.trim().to_string())
    }
}
