use std::sync::Arc;

use promptshelf_core::application::PromptShelfService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PromptShelfService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PromptShelfService) -> Self {
        Self { args, service }
    }
}
