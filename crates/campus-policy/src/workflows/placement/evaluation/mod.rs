mod config;
mod rules;

pub use config::EligibilityConfig;
pub use rules::{standard_chain, AttendanceRule, CgpaRule, CreditsRule, DisciplinaryRule};

use super::domain::{EligibilityStatus, RollNumber, StudentProfile};
use crate::policy::{EvaluationStatus, RuleChain};
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying an ordered rule chain to a profile.
#[derive(Debug)]
pub struct EligibilityEngine {
    chain: RuleChain<StudentProfile>,
}

impl EligibilityEngine {
    pub fn standard(config: &EligibilityConfig) -> Self {
        Self::with_chain(standard_chain(config))
    }

    pub fn with_chain(chain: RuleChain<StudentProfile>) -> Self {
        Self { chain }
    }

    pub fn evaluate(&self, profile: &StudentProfile) -> EligibilityOutcome {
        let result = self.chain.evaluate(profile);
        let status = match result.status {
            EvaluationStatus::Pass => EligibilityStatus::Eligible,
            EvaluationStatus::Fail => EligibilityStatus::NotEligible,
        };

        tracing::debug!(
            roll_no = %profile.roll_no.0,
            status = status.label(),
            reason = result.first_reason().unwrap_or("none"),
            "placement eligibility evaluated"
        );

        EligibilityOutcome {
            roll_no: profile.roll_no.clone(),
            status,
            reasons: result.reasons,
        }
    }
}

/// Classification plus the single reason that stopped the chain, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub roll_no: RollNumber,
    pub status: EligibilityStatus,
    pub reasons: Vec<String>,
}

impl EligibilityOutcome {
    pub fn summary(&self) -> String {
        match self.reasons.as_slice() {
            [] => self.status.label().to_string(),
            reasons => format!("{}: {}", self.status.label(), reasons.join("; ")),
        }
    }
}
