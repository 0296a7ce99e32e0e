use super::handlers::get_sidebar::{__path_get_sidebar, get_sidebar};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_sidebar))]
pub struct SidebarApiDoc;

pub fn sidebar_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/sidebar", state.args.server.root_path),
        get(get_sidebar),
    )
}
