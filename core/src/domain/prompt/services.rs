use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    prompt::{
        entities::prompt::Prompt,
        ports::{PromptRepository, PromptService},
        value_objects::{CreatePromptInput, SearchPromptsInput},
    },
};

impl<PR> PromptService for Service<PR>
where
    PR: PromptRepository,
{
    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_prompt(&self, input: CreatePromptInput) -> Result<Prompt, CoreError> {
        let existing = self
            .prompt_repository
            .find_by_title(input.title.clone())
            .await?;

        if existing.is_some() {
            info!("prompt with this title already exists");
            return Err(CoreError::PromptAlreadyExists);
        }

        let prompt = Prompt::new(input.title, input.content);
        let created_prompt = self.prompt_repository.create_prompt(prompt).await?;

        Ok(created_prompt)
    }

    #[instrument(skip(self))]
    async fn search_prompts(&self, input: SearchPromptsInput) -> Result<Vec<Prompt>, CoreError> {
        let prompts = match input.normalized_term() {
            Some(term) => {
                self.prompt_repository
                    .search_many(term.to_string())
                    .await?
            }
            None => self.prompt_repository.find_many().await?,
        };

        Ok(prompts)
    }
}
