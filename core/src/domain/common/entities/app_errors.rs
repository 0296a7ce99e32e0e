use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Prompt already exists")]
    PromptAlreadyExists,

    #[error("Internal server error")]
    InternalServerError,
}
