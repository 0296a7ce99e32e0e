use axum::extract::{OriginalUri, Query, State};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::prompt::actions::{SEARCH_FAILED, search_prompts_action};
use crate::application::http::prompt::validators::SearchPromptsForm;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::ui::sidebar::{SidebarContent, SidebarView};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetSidebarQuery {
    /// Current search text, as carried by the page URL.
    pub q: Option<String>,
    /// Render the sidebar collapsed.
    #[serde(default)]
    pub collapsed: bool,
}

#[utoipa::path(
    get,
    path = "",
    tag = "sidebar",
    summary = "Render sidebar",
    description = "Runs the prompt search for `q` and describes the sidebar showing the results.",
    params(GetSidebarQuery),
    responses(
        (status = 200, body = SidebarView),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn get_sidebar(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<GetSidebarQuery>,
) -> Result<Response<SidebarView>, ApiError> {
    let result = search_prompts_action(&state.service, SearchPromptsForm { q: query.q })
        .await
        .into_body();

    let prompts = result.prompts.ok_or_else(|| {
        ApiError::InternalServerError(result.message.unwrap_or_else(|| SEARCH_FAILED.to_string()))
    })?;

    let mut sidebar = SidebarContent::from_location(prompts, &uri.to_string());
    if query.collapsed {
        sidebar.toggle_collapse();
    }

    Ok(Response::OK(sidebar.view()))
}
