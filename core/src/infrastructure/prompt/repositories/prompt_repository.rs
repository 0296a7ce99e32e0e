use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prompt::{entities::prompt::Prompt, ports::PromptRepository},
};
use crate::entity::prompts::{
    ActiveModel as PromptActiveModel, Column as PromptColumn, Entity as PromptEntity,
};

const LIKE_ESCAPE: char = '\\';

#[derive(Debug, Clone)]
pub struct PostgresPromptRepository {
    pub db: DatabaseConnection,
}

impl PostgresPromptRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn newest_first() -> Select<PromptEntity> {
        PromptEntity::find().order_by_desc(PromptColumn::CreatedAt)
    }

    async fn fetch(
        &self,
        query: Select<PromptEntity>,
        action: &str,
    ) -> Result<Vec<Prompt>, CoreError> {
        let prompts = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to {}: {}", action, e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Prompt::from)
            .collect::<Vec<Prompt>>();

        Ok(prompts)
    }
}

/// `column ILIKE '%term%'` with LIKE metacharacters in `term` escaped.
fn contains_ignore_case(column: PromptColumn, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(term));

    Expr::col((PromptEntity, column)).ilike(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

impl PromptRepository for PostgresPromptRepository {
    async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, CoreError> {
        PromptEntity::insert(PromptActiveModel::from(prompt.clone()))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create prompt: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(prompt)
    }

    async fn find_many(&self) -> Result<Vec<Prompt>, CoreError> {
        self.fetch(Self::newest_first(), "fetch prompts").await
    }

    async fn find_by_title(&self, title: String) -> Result<Option<Prompt>, CoreError> {
        let prompt = PromptEntity::find()
            .filter(PromptColumn::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get prompt by title: {}", e);
                CoreError::InternalServerError
            })?
            .map(Prompt::from);

        Ok(prompt)
    }

    async fn search_many(&self, term: String) -> Result<Vec<Prompt>, CoreError> {
        let term = term.trim();
        let mut query = Self::newest_first();

        if !term.is_empty() {
            query = query.filter(
                Condition::any()
                    .add(contains_ignore_case(PromptColumn::Title, term))
                    .add(contains_ignore_case(PromptColumn::Content, term)),
            );
        }

        self.fetch(query, "search prompts").await
    }
}
