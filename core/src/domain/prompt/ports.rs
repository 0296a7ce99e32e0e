use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prompt::{
        entities::prompt::Prompt,
        value_objects::{CreatePromptInput, SearchPromptsInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PromptService: Send + Sync {
    fn create_prompt(
        &self,
        input: CreatePromptInput,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    fn search_prompts(
        &self,
        input: SearchPromptsInput,
    ) -> impl Future<Output = Result<Vec<Prompt>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PromptRepository: Send + Sync {
    fn create_prompt(
        &self,
        prompt: Prompt,
    ) -> impl Future<Output = Result<Prompt, CoreError>> + Send;

    /// All prompts, newest first.
    fn find_many(&self) -> impl Future<Output = Result<Vec<Prompt>, CoreError>> + Send;

    fn find_by_title(
        &self,
        title: String,
    ) -> impl Future<Output = Result<Option<Prompt>, CoreError>> + Send;

    /// Case-insensitive match on title or content, newest first. A blank
    /// term returns the same rows as [`PromptRepository::find_many`].
    fn search_many(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<Prompt>, CoreError>> + Send;
}
