use std::sync::Arc;

use chrono::Utc;

use super::domain::{RollNumber, StudentProfile};
use super::evaluation::{EligibilityConfig, EligibilityEngine, EligibilityOutcome};
use super::repository::{EligibilityRecord, EligibilityStore, StoreError};

/// Evaluates profiles and hands each classification to the store afterwards.
pub struct EligibilityService<S> {
    engine: Arc<EligibilityEngine>,
    store: Arc<S>,
}

impl<S> EligibilityService<S>
where
    S: EligibilityStore + 'static,
{
    pub fn new(store: Arc<S>, config: &EligibilityConfig) -> Self {
        Self::with_engine(EligibilityEngine::standard(config), store)
    }

    pub fn with_engine(engine: EligibilityEngine, store: Arc<S>) -> Self {
        Self {
            engine: Arc::new(engine),
            store,
        }
    }

    /// Pure evaluation without touching the store.
    pub fn preview(&self, profile: &StudentProfile) -> EligibilityOutcome {
        self.engine.evaluate(profile)
    }

    /// Evaluate and record. A failed save is logged; the outcome is still returned.
    pub fn evaluate(&self, profile: &StudentProfile) -> EligibilityOutcome {
        let outcome = self.engine.evaluate(profile);

        let record = EligibilityRecord::from_outcome(&outcome, Utc::now());
        if let Err(error) = self.store.save(record) {
            tracing::warn!(
                roll_no = %outcome.roll_no.0,
                %error,
                "failed to persist eligibility outcome"
            );
        }

        outcome
    }

    pub fn evaluate_all<'a, I>(&self, profiles: I) -> Vec<EligibilityOutcome>
    where
        I: IntoIterator<Item = &'a StudentProfile>,
    {
        profiles
            .into_iter()
            .map(|profile| self.evaluate(profile))
            .collect()
    }

    pub fn get(&self, roll_no: &RollNumber) -> Result<EligibilityRecord, StoreError> {
        self.store.fetch(roll_no)?.ok_or(StoreError::NotFound)
    }

    pub fn recorded(&self) -> Result<usize, StoreError> {
        self.store.count()
    }
}
