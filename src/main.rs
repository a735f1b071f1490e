use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use quizmatch::config::{LoggingSettings, Settings};
use quizmatch::core::{CompatibilityScorer, Matcher};
use quizmatch::error::{handle_json_payload_error, handle_query_payload_error};
use quizmatch::routes::{self, AppState, MatchLimits};
use quizmatch::services::{CacheManager, EmbeddingProvider, PostgresClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn config_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        config_error(e)
    })?;

    init_logging(&settings.logging);

    info!("Starting quizmatch service...");

    let weights = settings.scoring.weights.to_question_weights().map_err(|e| {
        error!("Invalid scoring weights: {}", e);
        config_error(e)
    })?;

    // Initialize PostgreSQL client
    let postgres = Arc::new(
        PostgresClient::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
            settings.database.acquire_timeout_secs,
            settings.database.idle_timeout_secs,
        )
        .await
        .map_err(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?,
    );

    info!("PostgreSQL client initialized");

    // Initialize cache manager (Redis is optional)
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let l1_cache_size = settings.cache.l1_cache_size.unwrap_or(10_000);

    let cache = match CacheManager::new(&settings.cache.redis_url, l1_cache_size, cache_ttl).await {
        Ok(c) => {
            info!("Cache manager initialized (L1: {} entries, TTL: {}s)", l1_cache_size, cache_ttl);
            c
        }
        Err(e) => {
            warn!("Failed to connect to Redis ({}), running with in-process cache only", e);
            CacheManager::in_memory(l1_cache_size, cache_ttl)
        }
    };

    let embedder = EmbeddingProvider::from_settings(&settings.embedding).map_err(|e| {
        error!("Failed to initialize embedding provider: {}", e);
        config_error(e)
    })?;

    info!("Embedding provider: {}", embedder.name());

    let min_score = settings.matching.min_score.unwrap_or(0.0);
    let matcher = Matcher::new(CompatibilityScorer::new(weights), min_score);

    info!("Matcher initialized with weights: {:?}", weights.as_array());

    // Build application state
    let app_state = AppState {
        postgres,
        cache: Arc::new(cache),
        embedder: Arc::new(embedder),
        matcher,
        limits: MatchLimits::from_settings(&settings.matching),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
