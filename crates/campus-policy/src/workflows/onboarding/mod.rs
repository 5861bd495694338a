//! Student onboarding: raw `key=value` input checked by a validation chain run in
//! audit mode, so every field problem is reported at once.

pub mod parser;
pub mod service;
pub mod validation;

pub use parser::parse_raw_input;
pub use service::{
    OnboardingError, OnboardingService, StudentId, StudentRecord, StudentRepository,
    StudentStoreError,
};
pub use validation::{registration_rules, RawFields, RequiredField, PROGRAMS};
