use otp_infra::config::SmsConfig;
use otp_shared::config::{
    CacheConfig, CorsConfig, Environment, LoggingConfig, OtpConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};

/// Everything the API binary reads from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub cache: CacheConfig,
    pub otp: OtpConfig,
    pub sms: SmsConfig,
    pub environment: Environment,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let logging = match std::env::var("LOG_LEVEL") {
            Ok(level) if !level.trim().is_empty() => LoggingConfig {
                level: level.trim().to_string(),
            },
            _ => LoggingConfig::for_environment(environment),
        };

        Config {
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            cache: CacheConfig::from_env(),
            otp: OtpConfig::from_env(),
            sms: SmsConfig::from_env(),
            environment,
            logging,
        }
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), String> {
        self.otp.validate()?;

        if self.is_production() {
            if self.sms.provider == "mock" {
                return Err("SMS_PROVIDER=mock is not allowed in production".to_string());
            }
            if self.cors.allowed_origins.is_empty() {
                log::warn!("ALLOWED_ORIGINS is empty; browsers will be refused by CORS");
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            cache: CacheConfig::default(),
            otp: OtpConfig::default(),
            sms: SmsConfig::default(),
            environment: Environment::Development,
            logging: LoggingConfig::default(),
        }
    }
}
