use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prompt::{entities::prompt::Prompt, ports::PromptRepository},
};

/// Process-local store. Titles are unique, like the `prompts.title`
/// constraint in Postgres.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromptRepository {
    prompts: Arc<RwLock<Vec<Prompt>>>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: Arc::new(RwLock::new(prompts)),
        }
    }

    async fn newest_first<F>(&self, predicate: F) -> Vec<Prompt>
    where
        F: Fn(&Prompt) -> bool,
    {
        let prompts = self.prompts.read().await;
        let mut found = prompts
            .iter()
            .filter(|prompt| predicate(*prompt))
            .cloned()
            .collect::<Vec<Prompt>>();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

impl PromptRepository for InMemoryPromptRepository {
    async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, CoreError> {
        let mut prompts = self.prompts.write().await;

        if prompts.iter().any(|p| p.title == prompt.title) {
            error!("Failed to create prompt: duplicate title {:?}", prompt.title);
            return Err(CoreError::InternalServerError);
        }

        prompts.push(prompt.clone());
        Ok(prompt)
    }

    async fn find_many(&self) -> Result<Vec<Prompt>, CoreError> {
        Ok(self.newest_first(|_| true).await)
    }

    async fn find_by_title(&self, title: String) -> Result<Option<Prompt>, CoreError> {
        let prompts = self.prompts.read().await;
        Ok(prompts.iter().find(|p| p.title == title).cloned())
    }

    async fn search_many(&self, term: String) -> Result<Vec<Prompt>, CoreError> {
        let term = term.trim();
        if term.is_empty() {
            return self.find_many().await;
        }

        Ok(self.newest_first(|prompt| prompt.matches(term)).await)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn aged(title: &str, content: &str, age_seconds: i64) -> Prompt {
        let mut prompt = Prompt::new(title.to_string(), content.to_string());
        prompt.created_at -= Duration::seconds(age_seconds);
        prompt.updated_at = prompt.created_at;
        prompt
    }

    fn seeded() -> InMemoryPromptRepository {
        InMemoryPromptRepository::with_prompts(vec![
            aged("Old AI prompt", "Summarize", 30),
            aged("Recipe", "Cook with ai help", 10),
            aged("Newest", "Unrelated", 0),
        ])
    }

    #[tokio::test]
    async fn test_find_many_is_newest_first() {
        let titles = seeded()
            .find_many()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();

        assert_eq!(titles, vec!["Newest", "Recipe", "Old AI prompt"]);
    }

    #[tokio::test]
    async fn test_search_many_matches_title_or_content() {
        let titles = seeded()
            .search_many(" AI ".to_string())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect::<Vec<_>>();

        assert_eq!(titles, vec!["Recipe", "Old AI prompt"]);
    }

    #[tokio::test]
    async fn test_search_many_blank_term_lists_everything() {
        let repository = seeded();

        assert_eq!(
            repository.search_many("   ".to_string()).await.unwrap(),
            repository.find_many().await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_create_prompt_enforces_unique_title() {
        let repository = InMemoryPromptRepository::new();

        repository
            .create_prompt(Prompt::new("Title".to_string(), "A".to_string()))
            .await
            .unwrap();
        let duplicate = repository
            .create_prompt(Prompt::new("Title".to_string(), "B".to_string()))
            .await;

        assert_eq!(duplicate, Err(CoreError::InternalServerError));
        assert!(
            repository
                .find_by_title("Title".to_string())
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repository
                .find_by_title("title".to_string())
                .await
                .unwrap()
                .is_none()
        );
    }
}
