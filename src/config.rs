//! Configuration module

use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Simulated model loading latency in milliseconds
    pub model_load_delay_ms: u64,

    /// Simulated inference latency in milliseconds
    pub inference_delay_ms: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_load_delay_ms: env::var("MODEL_LOAD_DELAY_MS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(500),

            inference_delay_ms: env::var("INFERENCE_DELAY_MS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(50),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn model_load_delay(&self) -> Duration {
        Duration::from_millis(self.model_load_delay_ms)
    }

    pub fn inference_delay(&self) -> Duration {
        Duration::from_millis(self.inference_delay_ms)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
impl Config {
    /// Configuration with no artificial latency
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            model_load_delay_ms: 0,
            inference_delay_ms: 0,
            environment: "test".to_string(),
        }
    }
}
