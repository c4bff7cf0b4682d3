use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use trivia_api::cli::{Cli, Commands};
use trivia_api::config::{ApiConfig, StorageBackend};
use trivia_api::helpers::database::initialize_database;
use trivia_api::storage::{
    InMemoryQuestionStore, QuestionStore, SqliteQuestionStore, STOCK_CATEGORIES,
};
use trivia_api::{configure, cors, handlers, logging};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration first to get logging settings
    let config = ApiConfig::load(cli.config.as_deref())?;
    let _log_guard = logging::init_logging(&config.logging)?;

    match cli.command() {
        Commands::Migrate => {
            initialize_database(&config.database.path)?;
            info!(path = %config.database.path.display(), "Database migrations applied");
            Ok(())
        }
        Commands::Serve => serve(config).await,
    }
}

async fn serve(config: ApiConfig) -> anyhow::Result<()> {
    let store: Arc<dyn QuestionStore> = match config.storage.backend {
        StorageBackend::Sqlite => {
            let conn = initialize_database(&config.database.path)?;
            Arc::new(SqliteQuestionStore::new(conn))
        }
        StorageBackend::Memory => {
            info!("Using in-memory question store; data is lost on exit");
            Arc::new(InMemoryQuestionStore::with_categories(STOCK_CATEGORIES))
        }
    };

    let bind_addr = config.bind_addr();
    info!("Starting trivia-api server at http://{}", bind_addr);

    // Each worker builds its own Cors middleware
    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_config))
            .app_data(web::Data::new(store.clone()))
            .configure(configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
