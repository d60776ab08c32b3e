mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use crate::Result;

/// Trait for AI text-generation providers
#[async_trait::async_trait]
pub trait AiProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}
