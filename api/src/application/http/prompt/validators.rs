use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Missing fields deserialize as empty strings so they are reported by
/// validation rather than rejected by the JSON extractor.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePromptValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "O título é obrigatório"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "O conteúdo é obrigatório"))]
    pub content: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, IntoParams, ToSchema)]
pub struct SearchPromptsForm {
    #[serde(default)]
    pub q: Option<String>,
}
