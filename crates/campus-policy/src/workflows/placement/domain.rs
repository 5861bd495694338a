use serde::{Deserialize, Serialize};

/// University roll number, the key eligibility results are stored under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RollNumber(pub String);

/// Snapshot of the academic record evaluated for placement eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub roll_no: RollNumber,
    pub name: String,
    pub cgpa: f64,
    pub attendance_pct: u8,
    pub earned_credits: u16,
    #[serde(default)]
    pub disciplinary: DisciplinaryFlag,
}

/// Disciplinary standing recorded by the student affairs office.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisciplinaryFlag {
    #[default]
    None,
    Warning,
    Suspended,
}

impl DisciplinaryFlag {
    pub fn is_flagged(self) -> bool {
        !matches!(self, DisciplinaryFlag::None)
    }
}

/// Placement classification derived from the rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityStatus {
    Eligible,
    NotEligible,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "ELIGIBLE",
            EligibilityStatus::NotEligible => "NOT_ELIGIBLE",
        }
    }
}
