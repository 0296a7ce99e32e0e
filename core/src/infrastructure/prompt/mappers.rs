use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;

use crate::domain::prompt::entities::prompt::Prompt;
use crate::entity::prompts::{ActiveModel as PromptActiveModel, Model as PromptModel};

impl From<PromptModel> for Prompt {
    fn from(model: PromptModel) -> Self {
        Prompt {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<Prompt> for PromptActiveModel {
    fn from(prompt: Prompt) -> Self {
        PromptActiveModel {
            id: Set(prompt.id),
            title: Set(prompt.title),
            content: Set(prompt.content),
            created_at: Set(prompt.created_at.naive_utc()),
            updated_at: Set(prompt.updated_at.naive_utc()),
        }
    }
}
