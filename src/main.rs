use anyhow::Context;
use todo_agenda::api::{AppState, create_router};
use todo_agenda::infrastructure::{AppConfig, SqliteTodoRepository};
use todo_agenda::server::serve;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(error) = run().await {
        tracing::error!("{:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Configuration Error")?;

    let repository = SqliteTodoRepository::connect(&config.database_url)
        .await
        .context("DB Error")?;
    repository.ensure_schema().await.context("DB Error")?;
    tracing::info!(database_url = %config.database_url, "Database ready");

    let router = create_router(AppState::new(repository.clone()));

    let result = serve(&config.server, router).await;

    repository.close().await;

    result
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_agenda=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
