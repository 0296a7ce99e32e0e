use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};
use tracing::warn;

use crate::application::http::prompt::actions::{
    SearchPromptsResult, search_prompts_action, search_rejected,
};
use crate::application::http::prompt::validators::SearchPromptsForm;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/search",
    tag = "prompt",
    summary = "Search prompts",
    description = "Lists prompts whose title or content contains `q`, ignoring case. \
                   A blank or missing `q` lists every prompt, as does a request without \
                   form data. Newest first.",
    request_body(content = SearchPromptsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = SearchPromptsResult),
        (status = 400, body = SearchPromptsResult, description = "Form data could not be read"),
        (status = 500, body = SearchPromptsResult, description = "Search failed"),
    ),
)]
pub async fn search_prompts(
    State(state): State<AppState>,
    form: Result<Form<SearchPromptsForm>, FormRejection>,
) -> Response<SearchPromptsResult> {
    let form = match form {
        Ok(Form(form)) => form,
        // No form data at all: same as submitting without `q`.
        Err(FormRejection::InvalidFormContentType(_)) => SearchPromptsForm::default(),
        Err(rejection) => {
            warn!("Rejected search form: {}", rejection.body_text());
            return search_rejected();
        }
    };

    search_prompts_action(&state.service, form).await
}
