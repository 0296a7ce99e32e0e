use super::handlers::create_prompt::{__path_create_prompt, create_prompt};
use super::handlers::search_prompts::{__path_search_prompts, search_prompts};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_prompt, search_prompts))]
pub struct PromptApiDoc;

pub fn prompt_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/prompts", state.args.server.root_path),
            post(create_prompt),
        )
        .route(
            &format!("{}/prompts/search", state.args.server.root_path),
            post(search_prompts),
        )
}
