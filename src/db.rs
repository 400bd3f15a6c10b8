//! Database module - in-memory fleet tables
//!
//! The fleet is a fixed set of engine records and the C-MAPSS sensor
//! catalogue. Both tables are built once at startup and never mutated.

use std::collections::BTreeMap;

use crate::models::{Engine, EngineStatus, SensorDescriptor};

/// Read-only fleet database shared by all handlers
#[derive(Debug, Clone)]
pub struct FleetDb {
    engines: BTreeMap<i64, Engine>,
    sensors: BTreeMap<&'static str, SensorDescriptor>,
}

impl FleetDb {
    /// Database seeded with the built-in engine and sensor tables
    pub fn seeded() -> Self {
        Self::from_tables(ENGINES.iter().copied(), SENSORS.iter().copied())
    }

    pub fn from_tables(
        engines: impl IntoIterator<Item = Engine>,
        sensors: impl IntoIterator<Item = SensorDescriptor>,
    ) -> Self {
        let engines: BTreeMap<_, _> = engines.into_iter().map(|e| (e.unit_id, e)).collect();
        let sensors: BTreeMap<_, _> = sensors.into_iter().map(|s| (s.sensor_id, s)).collect();

        let db = Self { engines, sensors };
        tracing::debug!("Fleet database: {} engines, {} sensors", db.engines.len(), db.sensor_count());
        db
    }

    /// All engines ordered by unit id
    pub fn engines(&self) -> impl Iterator<Item = &Engine> {
        self.engines.values()
    }

    pub fn engine(&self, unit_id: i64) -> Option<&Engine> {
        self.engines.get(&unit_id)
    }

    pub fn sensor(&self, sensor_id: &str) -> Option<&SensorDescriptor> {
        self.sensors.get(sensor_id)
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }
}

const ENGINES: &[Engine] = &[
    Engine { unit_id: 1, max_cycles: 192, status: EngineStatus::Active },
    Engine { unit_id: 2, max_cycles: 250, status: EngineStatus::Retired },
    Engine { unit_id: 5, max_cycles: 150, status: EngineStatus::Active },
];

const fn sensor(sensor_id: &'static str, name: &'static str, unit: &'static str) -> SensorDescriptor {
    SensorDescriptor { sensor_id, name, unit }
}

const SENSORS: &[SensorDescriptor] = &[
    sensor("s_1", "Fan Inlet Temperature", "°R"),
    sensor("s_2", "LPC Outlet Temperature", "°R"),
    sensor("s_3", "HPC Outlet Temperature", "°R"),
    sensor("s_4", "LPT Outlet Temperature", "°R"),
    sensor("s_5", "Fan Inlet Pressure", "psia"),
    sensor("s_6", "Bypass Duct Pressure", "psia"),
    sensor("s_7", "HPC Outlet Pressure", "psia"),
    sensor("s_8", "Physical Fan Speed", "rpm"),
    sensor("s_9", "Physical Core Speed", "rpm"),
    sensor("s_10", "Engine Pressure Ratio", "-"),
    sensor("s_11", "HPC Outlet Static Pressure", "psia"),
    sensor("s_12", "Fuel Flow Ratio", "pps/psi"),
    sensor("s_13", "Corrected Fan Speed", "rpm"),
    sensor("s_14", "Corrected Core Speed", "rpm"),
    sensor("s_15", "Bypass Ratio", "-"),
    sensor("s_16", "Burner Fuel-Air Ratio", "-"),
    sensor("s_17", "Bleed Enthalpy", "-"),
    sensor("s_18", "Demanded Fan Speed", "rpm"),
    sensor("s_19", "Demanded Corrected Fan Speed", "rpm"),
    sensor("s_20", "HPT Coolant Bleed", "lbm/s"),
    sensor("s_21", "LPT Coolant Bleed", "lbm/s"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_fleet_has_three_engines_in_id_order() {
        let db = FleetDb::seeded();
        let ids: Vec<i64> = db.engines().map(|e| e.unit_id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn seeded_fleet_has_all_sensors() {
        let db = FleetDb::seeded();
        assert_eq!(db.sensor_count(), 21);
        for i in 1..=21 {
            assert!(db.sensor(&format!("s_{}", i)).is_some(), "missing s_{}", i);
        }
    }

    #[test]
    fn sensor_lookup_returns_descriptor() {
        let db = FleetDb::seeded();
        let s = db.sensor("s_12").unwrap();
        assert_eq!(s.name, "Fuel Flow Ratio");
        assert_eq!(s.unit, "pps/psi");
        assert!(db.sensor("s_22").is_none());
    }
}
