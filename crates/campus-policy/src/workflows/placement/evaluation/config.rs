use serde::{Deserialize, Serialize};

/// Minimum academic standing required for placement drives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub min_cgpa: f64,
    pub min_attendance_pct: u8,
    pub min_credits: u16,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_cgpa: 6.0,
            min_attendance_pct: 75,
            min_credits: 15,
        }
    }
}
