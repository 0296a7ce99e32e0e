use crate::application::http::{prompt::router::PromptApiDoc, sidebar::router::SidebarApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PromptShelf API"
    ),
    nest(
        (path = "/prompts", api = PromptApiDoc),
        (path = "/sidebar", api = SidebarApiDoc),
    )
)]
pub struct ApiDoc;
