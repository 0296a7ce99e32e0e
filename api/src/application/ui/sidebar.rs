//! Sidebar listing prompts, with a collapse toggle, a "Novo Prompt" button
//! and a search box whose text lives in the URL.
//!
//! The component is a plain state machine: events update the state and
//! produce navigation intents, and [`SidebarContent::view`] describes what
//! should be on screen. Nothing here needs a browser.

use promptshelf_core::domain::prompt::entities::PromptSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ROOT_PATH: &str = "/";
pub const NEW_PROMPT_PATH: &str = "/new";
pub const SEARCH_PARAM: &str = "q";

pub const COLLAPSE_LABEL: &str = "Minimizar sidebar";
pub const EXPAND_LABEL: &str = "Expandir sidebar";
pub const NEW_PROMPT_LABEL: &str = "Novo Prompt";
pub const PROMPT_LIST_ROLE: &str = "complementary";

/// Client-side router. Pushes are fire-and-forget.
pub trait Navigator {
    fn push(&self, href: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    ToggleCollapse,
    /// New value of the search input after a keystroke.
    SearchChanged(String),
    NewPrompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarContent {
    prompts: Vec<PromptSummary>,
    expanded: bool,
    search_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ButtonView {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchBoxView {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PromptListView {
    pub role: String,
    pub items: Vec<PromptSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SidebarView {
    pub collapse_toggle: ButtonView,
    pub new_prompt: ButtonView,
    /// Absent while collapsed.
    pub search_box: Option<SearchBoxView>,
    /// Absent while collapsed.
    pub prompt_list: Option<PromptListView>,
}

/// Location to navigate to for the given search text.
pub fn search_href(text: &str) -> String {
    if text.trim().is_empty() {
        ROOT_PATH.to_string()
    } else {
        format!("/{}={}", SEARCH_PARAM, urlencoding::encode(text))
    }
}

/// Reads the `q` parameter from the query string of `location`.
pub fn search_param(location: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;

    serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .ok()?
        .into_iter()
        .find_map(|(key, value)| (key == SEARCH_PARAM).then_some(value))
}

impl SidebarContent {
    pub fn new(prompts: Vec<PromptSummary>, initial_search: Option<String>) -> Self {
        Self {
            prompts,
            expanded: true,
            search_text: initial_search.unwrap_or_default(),
        }
    }

    pub fn from_location(prompts: Vec<PromptSummary>, location: &str) -> Self {
        Self::new(prompts, search_param(location))
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn toggle_collapse(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn type_search(&mut self, text: impl Into<String>) -> String {
        self.search_text = text.into();
        search_href(&self.search_text)
    }

    pub fn new_prompt(&self) -> &'static str {
        NEW_PROMPT_PATH
    }

    /// Applies `event` and returns where to navigate, if anywhere.
    pub fn apply(&mut self, event: SidebarEvent) -> Option<String> {
        match event {
            SidebarEvent::ToggleCollapse => {
                self.toggle_collapse();
                None
            }
            SidebarEvent::SearchChanged(text) => Some(self.type_search(text)),
            SidebarEvent::NewPrompt => Some(self.new_prompt().to_string()),
        }
    }

    pub fn dispatch<N>(&mut self, event: SidebarEvent, navigator: &N)
    where
        N: Navigator + ?Sized,
    {
        if let Some(href) = self.apply(event) {
            navigator.push(&href);
        }
    }

    pub fn view(&self) -> SidebarView {
        let toggle_label = if self.expanded {
            COLLAPSE_LABEL
        } else {
            EXPAND_LABEL
        };

        SidebarView {
            collapse_toggle: ButtonView {
                label: toggle_label.to_string(),
                href: None,
            },
            new_prompt: ButtonView {
                label: NEW_PROMPT_LABEL.to_string(),
                href: Some(NEW_PROMPT_PATH.to_string()),
            },
            search_box: self.expanded.then(|| SearchBoxView {
                name: SEARCH_PARAM.to_string(),
                value: self.search_text.clone(),
            }),
            prompt_list: self.expanded.then(|| PromptListView {
                role: PROMPT_LIST_ROLE.to_string(),
                items: self.prompts.clone(),
            }),
        }
    }
}
