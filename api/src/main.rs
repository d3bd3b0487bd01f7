use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use otp_api::app::create_app;
use otp_api::config::Config;
use otp_api::routes::otp::AppState;
use otp_core::services::OtpService;
use otp_infra::cache::OtpStore;
use otp_infra::sms::{create_sms_service, SmsDispatcher};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Initialize logger; tracing events from the domain and infrastructure
    // crates are forwarded through the `log` facade
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!("Starting SMS OTP API Server ({})", config.environment);

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    let store = OtpStore::from_config(&config.cache)
        .await
        .context("Failed to initialize OTP store")?;
    info!("OTP store backend: {}", store.backend_name());

    let sms_provider = create_sms_service(&config.sms)
        .await
        .context("Failed to initialize SMS provider")?;
    info!("SMS provider: {}", sms_provider.provider_name());

    let otp_service = OtpService::new(
        Arc::new(SmsDispatcher::from_boxed(sms_provider)),
        Arc::new(store),
        config.otp.clone(),
    )?;
    let app_state = web::Data::new(AppState::new(otp_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    let environment = config.environment;
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &cors_config, environment, max_payload_size)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
