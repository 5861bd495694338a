use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{EligibilityStatus, RollNumber};
use super::evaluation::EligibilityOutcome;

/// Stored classification for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRecord {
    pub roll_no: RollNumber,
    pub status: EligibilityStatus,
    pub reasons: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

impl EligibilityRecord {
    pub fn from_outcome(outcome: &EligibilityOutcome, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            roll_no: outcome.roll_no.clone(),
            status: outcome.status,
            reasons: outcome.reasons.clone(),
            evaluated_at,
        }
    }

    pub fn status_view(&self) -> EligibilityStatusView {
        EligibilityStatusView {
            roll_no: self.roll_no.clone(),
            status: self.status.label(),
            reason: self.reasons.first().cloned(),
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait EligibilityStore: Send + Sync {
    fn save(&self, record: EligibilityRecord) -> Result<(), StoreError>;
    fn fetch(&self, roll_no: &RollNumber) -> Result<Option<EligibilityRecord>, StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
}

/// Error enumeration shared by the in-memory and test stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Public representation of a stored classification.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityStatusView {
    pub roll_no: RollNumber,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
