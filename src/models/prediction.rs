//! Prediction model

use serde::Serialize;
use validator::Validate;

use super::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const HIGH_BELOW: f64 = 30.0;
    pub const MEDIUM_BELOW: f64 = 70.0;

    pub fn from_health_score(health_score: f64) -> Self {
        if health_score < Self::HIGH_BELOW {
            RiskLevel::High
        } else if health_score < Self::MEDIUM_BELOW {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Output of the inference service for a single engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Validate)]
pub struct Prediction {
    pub predicted_rul: i64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub health_score: f64,
    pub risk_level: RiskLevel,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub unit_id: i64,
    pub current_cycle: i64,
    pub predicted_rul: i64,
    pub health_score: f64,
    pub risk_level: RiskLevel,
    pub confidence: f64,
}

impl PredictionResponse {
    pub fn new(engine: &Engine, prediction: Prediction) -> Self {
        Self {
            unit_id: engine.unit_id,
            current_cycle: engine.max_cycles - prediction.predicted_rul,
            predicted_rul: prediction.predicted_rul,
            health_score: prediction.health_score,
            risk_level: prediction.risk_level,
            confidence: prediction.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EngineStatus;

    #[test]
    fn risk_thresholds() {
        assert_eq!(RiskLevel::from_health_score(0.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_health_score(29.99), RiskLevel::High);
        assert_eq!(RiskLevel::from_health_score(30.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_health_score(69.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_health_score(70.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_health_score(100.0), RiskLevel::Low);
    }

    #[test]
    fn out_of_range_health_score_fails_validation() {
        let prediction = Prediction {
            predicted_rul: 45,
            health_score: 120.0,
            risk_level: RiskLevel::Low,
            confidence: 0.95,
        };
        assert!(prediction.validate().is_err());
    }

    #[test]
    fn response_derives_current_cycle() {
        let engine = Engine { unit_id: 1, max_cycles: 192, status: EngineStatus::Active };
        let prediction = Prediction {
            predicted_rul: 45,
            health_score: 23.44,
            risk_level: RiskLevel::High,
            confidence: 0.95,
        };
        let response = PredictionResponse::new(&engine, prediction);
        assert_eq!(response.current_cycle, 147);
        assert_eq!(serde_json::to_value(&response).unwrap()["risk_level"], "High");
    }
}
