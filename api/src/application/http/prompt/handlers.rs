pub mod create_prompt;
pub mod search_prompts;
