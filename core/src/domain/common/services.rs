use crate::domain::prompt::ports::PromptRepository;

/// Entry point of the domain: every use case is implemented on this type,
/// generic over the ports it needs.
#[derive(Clone)]
pub struct Service<PR>
where
    PR: PromptRepository,
{
    pub(crate) prompt_repository: PR,
}

impl<PR> Service<PR>
where
    PR: PromptRepository,
{
    pub fn new(prompt_repository: PR) -> Self {
        Self { prompt_repository }
    }
}
