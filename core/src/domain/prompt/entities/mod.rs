pub mod prompt;

pub use prompt::{Prompt, PromptSummary};
