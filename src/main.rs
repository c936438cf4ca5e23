use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use career_compass::config::{LoggingSettings, Settings};
use career_compass::core::Recommender;
use career_compass::routes::{self, AppState};
use career_compass::services::{Catalog, PlanEnhancer};
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG takes precedence over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the configured level applies
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting Career Compass recommendation service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    // The catalog is a startup precondition: no traffic without it
    let catalog = Catalog::load(&settings.catalog.careers_path, &settings.catalog.courses_path)
        .map_err(|e| {
            error!("Failed to load catalog: {}", e);
            io::Error::new(io::ErrorKind::InvalidData, e.to_string())
        })?;

    let recommender = Recommender::new(Arc::new(catalog));

    let enhancer = PlanEnhancer::new(&settings.enhancer).map_err(|e| {
        error!("Failed to initialize plan enhancer: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    if enhancer.is_enabled() {
        info!(
            "Plan enhancer enabled (model: {}, timeout: {}s)",
            settings.enhancer.model, settings.enhancer.timeout_secs
        );
    } else {
        info!("Plan enhancer disabled, serving draft plans");
    }

    // Build application state
    let app_state = AppState {
        recommender,
        enhancer: Arc::new(enhancer),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let assets = settings.assets.clone();

    info!("Serving static files from {}", assets.dir);
    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .service(routes::static_files(&assets.dir, &assets.index))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
