use crate::error::AppResult;

pub mod openai;

/// Text-generation collaborator abstraction
///
/// The recommendation pipeline only depends on this seam: production wires
/// in the OpenAI chat-completions provider, tests substitute mocks or
/// stubs. One call produces one recommendation sentence for one
/// (aspect, sentiment) entry.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produces a completion for a fully assembled prompt
    ///
    /// Implementations must report empty completions as errors so callers
    /// never mistake a blank string for a recommendation.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}
