use crate::{
    domain::common::{PromptShelfConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        prompt::PostgresPromptRepository,
    },
};

pub type PromptShelfService = Service<PostgresPromptRepository>;

pub async fn create_service(
    config: PromptShelfConfig,
) -> Result<PromptShelfService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let prompt_repository = PostgresPromptRepository::new(postgres.get_db());

    Ok(Service::new(prompt_repository))
}
