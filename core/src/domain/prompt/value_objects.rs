#[derive(Debug, Clone)]
pub struct CreatePromptInput {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchPromptsInput {
    pub term: Option<String>,
}

impl SearchPromptsInput {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
        }
    }

    /// The trimmed term, or `None` when there is nothing to filter on.
    pub fn normalized_term(&self) -> Option<&str> {
        self.term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}
