//! Placement eligibility: a short-circuit rule chain over a student's academic record.
//!
//! Rule order is the priority order. The first failing rule decides the outcome
//! and is the only reason reported.

pub mod domain;
pub mod evaluation;
pub mod repository;
pub mod roster;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{DisciplinaryFlag, EligibilityStatus, RollNumber, StudentProfile};
pub use evaluation::{
    standard_chain, AttendanceRule, CgpaRule, CreditsRule, DisciplinaryRule, EligibilityConfig,
    EligibilityEngine, EligibilityOutcome,
};
pub use repository::{EligibilityRecord, EligibilityStatusView, EligibilityStore, StoreError};
pub use roster::{RosterImportError, RosterImporter};
pub use router::eligibility_router;
pub use service::EligibilityService;
