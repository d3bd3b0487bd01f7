//! Application factory
//!
//! Builds the Actix-web application around an `AppState`, so the binary and
//! the integration tests wire the same routes and middleware.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use otp_core::services::{CacheServiceTrait, SmsServiceTrait};
use otp_shared::config::{CorsConfig, Environment};

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::otp::{send_otp, verify_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, C>(
    app_state: web::Data<AppState<S, C>>,
    cors_config: &CorsConfig,
    environment: Environment,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(create_cors(cors_config, environment))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check::<S, C>))
        .route("/send-otp", web::post().to(send_otp::<S, C>))
        .route("/verify-otp", web::post().to(verify_otp::<S, C>))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Returns 503 when the OTP store cannot be reached.
async fn health_check<S, C>(app_state: web::Data<AppState<S, C>>) -> HttpResponse
where
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let (mut response, status, store) = match app_state.otp_service.check_store().await {
        Ok(()) => (HttpResponse::Ok(), "healthy", "ok"),
        Err(_) => (HttpResponse::ServiceUnavailable(), "unhealthy", "unavailable"),
    };

    response.json(serde_json::json!({
        "status": status,
        "service": "sms-otp-api",
        "version": env!("CARGO_PKG_VERSION"),
        "store": store,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
