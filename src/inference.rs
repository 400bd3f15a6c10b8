//! Inference service
//!
//! Stand-in for the RUL model. Loading and inference only simulate latency;
//! the prediction itself is a fixed RUL normalized against the engine's
//! maximum cycle count.

use std::time::Duration;

use tokio::sync::OnceCell;
use validator::Validate;

use crate::models::{Prediction, RiskLevel};
use crate::{AppError, AppResult};

/// Fixed remaining-useful-life returned for every engine
pub const PREDICTED_RUL: i64 = 45;

pub const CONFIDENCE: f64 = 0.95;

const MODEL_NAME: &str = "LSTM_LOADED";

#[derive(Debug)]
pub struct InferenceService {
    model: OnceCell<&'static str>,
    load_delay: Duration,
    inference_delay: Duration,
}

impl InferenceService {
    pub fn new(load_delay: Duration, inference_delay: Duration) -> Self {
        Self {
            model: OnceCell::new(),
            load_delay,
            inference_delay,
        }
    }

    /// Load the model. Later calls are no-ops.
    pub async fn load(&self) {
        self.model
            .get_or_init(|| async {
                tracing::info!("Loading LSTM model...");
                tokio::time::sleep(self.load_delay).await;
                tracing::info!("Model loaded successfully");
                MODEL_NAME
            })
            .await;
    }

    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    pub async fn predict(&self, max_cycles: i64) -> AppResult<Prediction> {
        if !self.is_loaded() {
            return Err(AppError::InternalError("Model not loaded".to_string()));
        }
        if max_cycles <= 0 {
            return Err(AppError::InternalError(format!("Invalid max_cycles: {}", max_cycles)));
        }

        tokio::time::sleep(self.inference_delay).await;

        let health_score = health_score(PREDICTED_RUL, max_cycles);
        let prediction = Prediction {
            predicted_rul: PREDICTED_RUL,
            health_score,
            risk_level: RiskLevel::from_health_score(health_score),
            confidence: CONFIDENCE,
        };
        prediction.validate()?;

        Ok(prediction)
    }
}

/// RUL as a percentage of `max_cycles`, clamped to [0, 100] and rounded to 2 places
pub fn health_score(predicted_rul: i64, max_cycles: i64) -> f64 {
    let score = (predicted_rul as f64 / max_cycles as f64 * 100.0).clamp(0.0, 100.0);
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> InferenceService {
        InferenceService::new(Duration::ZERO, Duration::ZERO)
    }

    #[test]
    fn health_score_is_rounded() {
        assert_eq!(health_score(45, 192), 23.44);
        assert_eq!(health_score(45, 150), 30.0);
        assert_eq!(health_score(45, 250), 18.0);
    }

    #[test]
    fn health_score_is_clamped() {
        assert_eq!(health_score(45, 30), 100.0);
        assert_eq!(health_score(-10, 100), 0.0);
    }

    #[tokio::test]
    async fn load_sets_flag() {
        let svc = service();
        assert!(!svc.is_loaded());
        svc.load().await;
        assert!(svc.is_loaded());
        svc.load().await;
        assert!(svc.is_loaded());
    }

    #[tokio::test]
    async fn predict_requires_loaded_model() {
        let err = service().predict(192).await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[tokio::test]
    async fn predict_buckets_by_health() {
        let svc = service();
        svc.load().await;

        let p = svc.predict(192).await.unwrap();
        assert_eq!(p.predicted_rul, 45);
        assert_eq!(p.health_score, 23.44);
        assert_eq!(p.risk_level, RiskLevel::High);
        assert_eq!(p.confidence, 0.95);

        assert_eq!(svc.predict(150).await.unwrap().risk_level, RiskLevel::Medium);
        assert_eq!(svc.predict(50).await.unwrap().risk_level, RiskLevel::Low);

        let clamped = svc.predict(10).await.unwrap();
        assert_eq!(clamped.health_score, 100.0);
    }

    #[tokio::test]
    async fn predict_rejects_zero_cycles() {
        let svc = service();
        svc.load().await;
        assert!(svc.predict(0).await.is_err());
    }
}
