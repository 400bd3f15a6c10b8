//! Engine model

use serde::{Deserialize, Serialize};

use crate::db::FleetDb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    Active,
    Retired,
}

/// Engine inventory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub unit_id: i64,
    pub max_cycles: i64,
    pub status: EngineStatus,
}

impl Engine {
    pub fn list(db: &FleetDb) -> Vec<Self> {
        db.engines().copied().collect()
    }

    pub fn find_by_id(db: &FleetDb, unit_id: i64) -> Option<Self> {
        db.engine(unit_id).copied()
    }

    pub fn is_retired(&self) -> bool {
        self.status == EngineStatus::Retired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_name() {
        let engine = Engine { unit_id: 2, max_cycles: 250, status: EngineStatus::Retired };
        let json = serde_json::to_value(engine).unwrap();
        assert_eq!(json, serde_json::json!({"unit_id": 2, "max_cycles": 250, "status": "Retired"}));
    }

    #[test]
    fn find_by_id_unknown_is_none() {
        let db = FleetDb::seeded();
        assert!(Engine::find_by_id(&db, 99).is_none());
        assert!(Engine::find_by_id(&db, -1).is_none());
    }

    #[test]
    fn retired_engine_is_flagged() {
        let db = FleetDb::seeded();
        assert!(Engine::find_by_id(&db, 2).unwrap().is_retired());
        assert!(!Engine::find_by_id(&db, 1).unwrap().is_retired());
    }
}
