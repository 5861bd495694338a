use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::placement::domain::{DisciplinaryFlag, RollNumber, StudentProfile};
use crate::workflows::placement::evaluation::{EligibilityConfig, EligibilityEngine};
use crate::workflows::placement::repository::{EligibilityRecord, EligibilityStore, StoreError};
use crate::workflows::placement::EligibilityService;

pub(super) fn eligibility_config() -> EligibilityConfig {
    EligibilityConfig::default()
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::standard(&eligibility_config())
}

pub(super) fn profile(roll_no: &str) -> StudentProfile {
    StudentProfile {
        roll_no: RollNumber(roll_no.to_string()),
        name: "Ayaan".to_string(),
        cgpa: 8.10,
        attendance_pct: 88,
        earned_credits: 18,
        disciplinary: DisciplinaryFlag::None,
    }
}

pub(super) fn low_attendance_profile() -> StudentProfile {
    StudentProfile {
        attendance_pct: 72,
        ..profile("23BCS1001")
    }
}

pub(super) fn build_service() -> (EligibilityService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = EligibilityService::new(store.clone(), &eligibility_config());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<RollNumber, EligibilityRecord>>>,
}

impl EligibilityStore for MemoryStore {
    fn save(&self, record: EligibilityRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(record.roll_no.clone(), record);
        Ok(())
    }

    fn fetch(&self, roll_no: &RollNumber) -> Result<Option<EligibilityRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(roll_no).cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.lock().expect("store mutex poisoned").len())
    }
}

pub(super) struct UnavailableStore;

impl EligibilityStore for UnavailableStore {
    fn save(&self, _record: EligibilityRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _roll_no: &RollNumber) -> Result<Option<EligibilityRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
