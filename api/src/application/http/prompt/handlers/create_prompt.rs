use axum::extract::State;

use crate::application::http::prompt::actions::{CreatePromptResult, create_prompt_action};
use crate::application::http::prompt::validators::CreatePromptValidator;
use crate::application::http::server::api_entities::api_error::JsonPayload;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "prompt",
    summary = "Create prompt",
    description = "Creates a new prompt. Titles are unique.",
    request_body = CreatePromptValidator,
    responses(
        (status = 201, body = CreatePromptResult, description = "Prompt created"),
        (status = 400, body = CreatePromptResult, description = "Validation failed, or an `ApiErrorResponse` when the body is not JSON"),
        (status = 409, body = CreatePromptResult, description = "A prompt with this title already exists"),
        (status = 500, body = CreatePromptResult, description = "Prompt could not be created"),
    ),
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreatePromptValidator>,
) -> Response<CreatePromptResult> {
    create_prompt_action(&state.service, payload).await
}
