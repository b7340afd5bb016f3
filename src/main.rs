use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use expert_match::config::{LogFormat, LoggingSettings, Settings};
use expert_match::routes::{self, handle_json_payload_error, handle_path_error, AppState};
use expert_match::services::ExpertRegistry;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_tracing(&settings.logging);
    info!("Starting expert matching service...");

    let registry = match settings.registry.seed_file.as_deref() {
        Some(path) => ExpertRegistry::from_seed_file(path).map_err(|e| {
            error!("Failed to load expert seed from {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?,
        None => ExpertRegistry::seeded(),
    };

    info!(
        "Expert registry initialized ({} experts, {} history entries)",
        registry.len(),
        registry.history().len()
    );

    let app_state = AppState::new(registry);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
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
