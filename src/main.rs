use actix_web::middleware::{Condition, Logger};
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use rust_lotsizing::api::{configure, json_config};
use rust_lotsizing::config::AppConfig;
use rust_lotsizing::tools::ToolRegistry;

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });
    let sentry_enabled = sentry_guard.is_some();

    let registry = ToolRegistry::from_config(&config).map_err(|e| {
        error!("failed to set up tools: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    if config.epias.is_none() {
        info!("EPIAS credentials not set, fetch_mcp is disabled");
    }
    info!(
        "using {} solver, {} tools available",
        registry.solver_name(),
        registry.specs().len()
    );
    let registry = web::Data::new(registry);

    let json_limit = config.json_limit;
    info!("Starting server on http://127.0.0.1:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(sentry_enabled, sentry_actix::Sentry::new()))
            .wrap(Logger::default())
            .app_data(registry.clone())
            .app_data(json_config(json_limit))
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
