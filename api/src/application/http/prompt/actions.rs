//! Request-facing adapters between the HTTP handlers and [`PromptService`].
//!
//! Every failure is turned into a result body here; nothing escapes as an
//! error.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use promptshelf_core::domain::{
    common::entities::app_errors::CoreError,
    prompt::{
        entities::PromptSummary,
        ports::PromptService,
        value_objects::{CreatePromptInput, SearchPromptsInput},
    },
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::application::http::{
    prompt::validators::{CreatePromptValidator, SearchPromptsForm},
    server::api_entities::response::Response,
};

pub const VALIDATION_FAILED: &str = "Erro de validação";
pub const PROMPT_ALREADY_EXISTS: &str = "Este prompt já existe";
pub const CREATE_FAILED: &str = "Falha ao criar o prompt";
pub const CREATE_SUCCEEDED: &str = "Prompt criado com sucesso!";
pub const SEARCH_FAILED: &str = "Falha ao buscar prompts.";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreatePromptResult {
    pub success: bool,
    pub message: String,
    /// Messages per invalid field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchPromptsResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<PromptSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchPromptsResult {
    fn failed() -> Self {
        Self {
            success: false,
            prompts: None,
            message: Some(SEARCH_FAILED.to_string()),
        }
    }
}

impl CreatePromptResult {
    fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            errors: None,
        }
    }
}

fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

pub async fn create_prompt_action<S>(
    service: &S,
    payload: CreatePromptValidator,
) -> Response<CreatePromptResult>
where
    S: PromptService,
{
    if let Err(errors) = payload.validate() {
        return Response::Rejected(
            StatusCode::BAD_REQUEST,
            CreatePromptResult {
                success: false,
                message: VALIDATION_FAILED.to_string(),
                errors: Some(field_errors(&errors)),
            },
        );
    }

    let input = CreatePromptInput {
        title: payload.title,
        content: payload.content,
    };

    match service.create_prompt(input).await {
        Ok(_) => Response::Created(CreatePromptResult {
            success: true,
            message: CREATE_SUCCEEDED.to_string(),
            errors: None,
        }),
        Err(CoreError::PromptAlreadyExists) => {
            warn!("rejected duplicate prompt title");
            Response::Rejected(
                StatusCode::CONFLICT,
                CreatePromptResult::failed(PROMPT_ALREADY_EXISTS),
            )
        }
        Err(e) => {
            error!("Failed to create prompt: {}", e);
            Response::Rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                CreatePromptResult::failed(CREATE_FAILED),
            )
        }
    }
}

pub async fn search_prompts_action<S>(
    service: &S,
    form: SearchPromptsForm,
) -> Response<SearchPromptsResult>
where
    S: PromptService,
{
    let term = form.q.unwrap_or_default().trim().to_string();

    match service.search_prompts(SearchPromptsInput::new(term)).await {
        Ok(prompts) => Response::OK(SearchPromptsResult {
            success: true,
            prompts: Some(prompts.into_iter().map(PromptSummary::from).collect()),
            message: None,
        }),
        Err(e) => {
            error!("Failed to search prompts: {}", e);
            Response::Rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                SearchPromptsResult::failed(),
            )
        }
    }
}

/// Result for a search request whose form data could not be read.
pub fn search_rejected() -> Response<SearchPromptsResult> {
    Response::Rejected(StatusCode::BAD_REQUEST, SearchPromptsResult::failed())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use promptshelf_core::domain::prompt::entities::Prompt;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(String, String),
        Search(Option<String>),
    }

    struct StubPromptService {
        create: Result<(), CoreError>,
        search: Result<Vec<Prompt>, CoreError>,
        calls: Mutex<Vec<Call>>,
    }

    impl StubPromptService {
        fn new() -> Self {
            Self {
                create: Ok(()),
                search: Ok(Vec::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_create(mut self, error: CoreError) -> Self {
            self.create = Err(error);
            self
        }

        fn searching(mut self, result: Result<Vec<Prompt>, CoreError>) -> Self {
            self.search = result;
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PromptService for StubPromptService {
        async fn create_prompt(&self, input: CreatePromptInput) -> Result<Prompt, CoreError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Create(input.title.clone(), input.content.clone()));
            self.create
                .clone()
                .map(|_| Prompt::new(input.title, input.content))
        }

        async fn search_prompts(
            &self,
            input: SearchPromptsInput,
        ) -> Result<Vec<Prompt>, CoreError> {
            self.calls.lock().unwrap().push(Call::Search(input.term));
            self.search.clone()
        }
    }

    fn payload(title: &str, content: &str) -> CreatePromptValidator {
        CreatePromptValidator {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn prompts() -> Vec<Prompt> {
        vec![
            Prompt::new("AI Prompt 1".to_string(), "Content 1".to_string()),
            Prompt::new("AI Prompt 2".to_string(), "Content 2".to_string()),
        ]
    }

    #[tokio::test]
    async fn test_create_prompt_success() {
        let service = StubPromptService::new();

        let response =
            create_prompt_action(&service, payload("New Prompt", "Some content")).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.body().success);
        assert_eq!(response.body().message, CREATE_SUCCEEDED);
        assert_eq!(
            service.calls(),
            vec![Call::Create("New Prompt".into(), "Some content".into())]
        );
    }

    #[tokio::test]
    async fn test_create_prompt_validation_error_skips_service() {
        let service = StubPromptService::new();

        let response = create_prompt_action(&service, payload("", "")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.body();
        assert!(!body.success);
        assert_eq!(body.message, VALIDATION_FAILED);
        let errors = body.errors.as_ref().expect("field errors");
        assert_eq!(errors["title"], vec!["O título é obrigatório".to_string()]);
        assert_eq!(errors["content"], vec!["O conteúdo é obrigatório".to_string()]);
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_prompt_reports_only_invalid_fields() {
        let service = StubPromptService::new();

        let response = create_prompt_action(&service, payload("Title", "")).await;

        let errors = response.body().errors.clone().expect("field errors");
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["content"]);
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_prompt_duplicate_title() {
        let service = StubPromptService::new().failing_create(CoreError::PromptAlreadyExists);

        let response =
            create_prompt_action(&service, payload("Existing Prompt", "Some content")).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(!response.body().success);
        assert_eq!(response.body().message, PROMPT_ALREADY_EXISTS);
        assert_eq!(response.body().errors, None);
    }

    #[tokio::test]
    async fn test_create_prompt_generic_failure() {
        let service = StubPromptService::new().failing_create(CoreError::InternalServerError);

        let response =
            create_prompt_action(&service, payload("New Prompt", "Some content")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body().message, CREATE_FAILED);
    }

    #[tokio::test]
    async fn test_search_returns_summaries() {
        let found = prompts();
        let service = StubPromptService::new().searching(Ok(found.clone()));

        let response = search_prompts_action(
            &service,
            SearchPromptsForm {
                q: Some("AI".to_string()),
            },
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.body();
        assert!(body.success);
        assert_eq!(
            body.prompts,
            Some(found.into_iter().map(PromptSummary::from).collect())
        );
        assert_eq!(body.message, None);
    }

    #[tokio::test]
    async fn test_search_trims_term() {
        let service = StubPromptService::new().searching(Ok(prompts()));

        search_prompts_action(
            &service,
            SearchPromptsForm {
                q: Some("   AI   ".to_string()),
            },
        )
        .await;

        assert_eq!(service.calls(), vec![Call::Search(Some("AI".to_string()))]);
    }

    #[tokio::test]
    async fn test_search_without_q_uses_empty_term() {
        let service = StubPromptService::new().searching(Ok(prompts()));

        let response = search_prompts_action(&service, SearchPromptsForm::default()).await;

        assert!(response.body().success);
        assert_eq!(response.body().prompts.as_ref().map(Vec::len), Some(2));
        assert_eq!(service.calls(), vec![Call::Search(Some(String::new()))]);
    }

    #[tokio::test]
    async fn test_search_failure_is_generic() {
        for error in [CoreError::InternalServerError, CoreError::PromptAlreadyExists] {
            let service = StubPromptService::new().searching(Err(error));

            let response = search_prompts_action(
                &service,
                SearchPromptsForm {
                    q: Some("AI".to_string()),
                },
            )
            .await;

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = response.body();
            assert!(!body.success);
            assert_eq!(body.prompts, None);
            assert_eq!(body.message.as_deref(), Some(SEARCH_FAILED));
        }
    }

    #[test]
    fn test_search_rejected_uses_generic_message() {
        let response = search_rejected();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!response.body().success);
        assert_eq!(response.body().prompts, None);
        assert_eq!(response.body().message.as_deref(), Some(SEARCH_FAILED));
    }
}
