use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parser::parse_raw_input;
use super::validation::{registration_rules, RawFields};
use crate::policy::RuleChain;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    /// `SST-<year>-<seq>` where `seq` is the one-based position, zero padded to four digits.
    pub fn sequential(intake_year: i32, existing: usize) -> Self {
        StudentId(format!("SST-{intake_year}-{:04}", existing + 1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub enrolled_at: DateTime<Utc>,
}

pub trait StudentRepository: Send + Sync {
    fn save(&self, record: StudentRecord) -> Result<(), StudentStoreError>;
    fn count(&self) -> Result<usize, StudentStoreError>;
    fn all(&self) -> Result<Vec<StudentRecord>, StudentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StudentStoreError {
    #[error("student store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("invalid registration: {}", .0.join("; "))]
    Invalid(Vec<String>),
    #[error(transparent)]
    Store(#[from] StudentStoreError),
}

/// Parses, validates, and stores new student registrations.
pub struct OnboardingService<R> {
    repository: Arc<R>,
    rules: RuleChain<RawFields>,
    intake_year: i32,
}

impl<R> OnboardingService<R>
where
    R: StudentRepository + 'static,
{
    pub fn new(repository: Arc<R>, intake_year: i32) -> Self {
        Self {
            repository,
            rules: registration_rules(),
            intake_year,
        }
    }

    pub fn register(&self, raw: &str) -> Result<StudentRecord, OnboardingError> {
        let fields = parse_raw_input(raw);

        let result = self.rules.audit(&fields);
        if !result.is_pass() {
            tracing::debug!(errors = result.reasons.len(), "registration rejected");
            return Err(OnboardingError::Invalid(result.reasons));
        }

        let take = |key: &str| fields.get(key).cloned().unwrap_or_default();
        let record = StudentRecord {
            id: StudentId::sequential(self.intake_year, self.repository.count()?),
            name: take("name"),
            email: take("email"),
            phone: take("phone"),
            program: take("program"),
            enrolled_at: Utc::now(),
        };

        self.repository.save(record.clone())?;
        tracing::info!(student_id = %record.id.0, program = %record.program, "student onboarded");

        Ok(record)
    }

    pub fn roster(&self) -> Result<Vec<StudentRecord>, OnboardingError> {
        Ok(self.repository.all()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStudents {
        records: Mutex<Vec<StudentRecord>>,
    }

    impl StudentRepository for MemoryStudents {
        fn save(&self, record: StudentRecord) -> Result<(), StudentStoreError> {
            self.records
                .lock()
                .expect("student mutex poisoned")
                .push(record);
            Ok(())
        }

        fn count(&self) -> Result<usize, StudentStoreError> {
            Ok(self.records.lock().expect("student mutex poisoned").len())
        }

        fn all(&self) -> Result<Vec<StudentRecord>, StudentStoreError> {
            Ok(self.records.lock().expect("student mutex poisoned").clone())
        }
    }

    struct ReadOnlyStudents;

    impl StudentRepository for ReadOnlyStudents {
        fn save(&self, _record: StudentRecord) -> Result<(), StudentStoreError> {
            Err(StudentStoreError::Unavailable("read only".to_string()))
        }

        fn count(&self) -> Result<usize, StudentStoreError> {
            Ok(0)
        }

        fn all(&self) -> Result<Vec<StudentRecord>, StudentStoreError> {
            Ok(Vec::new())
        }
    }

    const RIYA: &str = "name=Riya;email=riya@sst.edu;phone=9876543210;program=CSE";

    #[test]
    fn registers_valid_students_with_sequential_ids() {
        let service = OnboardingService::new(Arc::new(MemoryStudents::default()), 2026);

        let first = service.register(RIYA).expect("first registration");
        let second = service
            .register("name=Kabir;email=kabir@sst.edu;phone=9123456780;program=AI")
            .expect("second registration");

        assert_eq!(first.id, StudentId("SST-2026-0001".to_string()));
        assert_eq!(second.id, StudentId("SST-2026-0002".to_string()));
        assert_eq!(first.program, "CSE");
        assert_eq!(service.roster().expect("roster").len(), 2);
    }

    #[test]
    fn rejects_invalid_input_with_all_errors() {
        let repository = Arc::new(MemoryStudents::default());
        let service = OnboardingService::new(repository.clone(), 2026);

        match service.register("name=;email=nobody;phone=12;program=CSE") {
            Err(OnboardingError::Invalid(errors)) => assert_eq!(
                errors,
                vec![
                    "name is required".to_string(),
                    "email is invalid".to_string(),
                    "phone is invalid".to_string(),
                ]
            ),
            other => panic!("expected validation errors, got {other:?}"),
        }
        assert_eq!(repository.count().expect("count"), 0);
    }

    #[test]
    fn surfaces_store_failures() {
        let service = OnboardingService::new(Arc::new(ReadOnlyStudents), 2026);

        match service.register(RIYA) {
            Err(OnboardingError::Store(StudentStoreError::Unavailable(reason))) => {
                assert_eq!(reason, "read only")
            }
            other => panic!("expected store error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_error_lists_reasons() {
        let error = OnboardingError::Invalid(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(error.to_string(), "invalid registration: a; b");
    }
}
