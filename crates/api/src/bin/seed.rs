//! Replace the stored projects with the sample portfolio.

use std::sync::Arc;

use anyhow::Context;
use folio_api::config::ServerConfig;
use folio_api::seed::seed_projects;
use folio_api::services::ProjectService;
use folio_db::store::PgStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=info,folio_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = folio_db::create_pool(&database_url, &config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    folio_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let store = Arc::new(PgStore::new(pool));
    let service = ProjectService::new(store.clone());

    let projects = seed_projects(&service)
        .await
        .context("Failed to seed projects")?;
    for project in &projects {
        tracing::info!(
            title = %project.title,
            category = %project.category,
            status = %project.status,
            "Seeded project"
        );
    }
    tracing::info!(count = projects.len(), "Database seeding completed");

    store.close().await;
    Ok(())
}
