//! Sensor catalogue and trend models

use serde::Serialize;

use crate::db::FleetDb;
use crate::{AppError, AppResult};

/// Sensor channels reported in every trend response
pub const CRITICAL_SENSORS: [&str; 4] = ["s_2", "s_11", "s_12", "s_14"];

/// Cycle axis of the trend window
pub const TREND_CYCLES: [i64; 5] = [100, 101, 102, 103, 104];

/// RUL values matching `TREND_CYCLES`
pub const RUL_TREND: [i64; 5] = [50, 49, 48, 47, 45];

const SYNTHETIC_BASELINE: f64 = 1400.0;
const SYNTHETIC_STEP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorDescriptor {
    pub sensor_id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorSeries {
    pub sensor_id: String,
    pub name: String,
    pub unit: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorTrendResponse {
    pub unit_id: i64,
    pub cycles: Vec<i64>,
    pub rul_trend: Vec<i64>,
    pub sensors: Vec<SensorSeries>,
}

impl SensorSeries {
    /// Synthetic series: `1400 + 2*i` for each point
    pub fn synthetic(descriptor: &SensorDescriptor, points: usize) -> Self {
        let data = (0..points)
            .map(|i| SYNTHETIC_BASELINE + SYNTHETIC_STEP * i as f64)
            .collect();

        Self {
            sensor_id: descriptor.sensor_id.to_string(),
            name: descriptor.name.to_string(),
            unit: descriptor.unit.to_string(),
            data,
        }
    }
}

impl SensorTrendResponse {
    /// Build the trend window for a unit. The unit must already be known.
    pub fn synthesize(db: &FleetDb, unit_id: i64) -> AppResult<Self> {
        let sensors = CRITICAL_SENSORS
            .iter()
            .map(|id| {
                db.sensor(id)
                    .map(|d| SensorSeries::synthetic(d, TREND_CYCLES.len()))
                    .ok_or_else(|| AppError::InternalError(format!("Sensor {} missing from catalogue", id)))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            unit_id,
            cycles: TREND_CYCLES.to_vec(),
            rul_trend: RUL_TREND.to_vec(),
            sensors,
        })
    }
}
