use std::io::Cursor;
use std::sync::{Arc, Mutex};

use campus_policy::policy::{rule_fn, Rule, RuleChain};
use campus_policy::workflows::placement::{
    standard_chain, AttendanceRule, CgpaRule, DisciplinaryFlag, DisciplinaryRule,
    EligibilityConfig, EligibilityEngine, EligibilityRecord, EligibilityService,
    EligibilityStatus, EligibilityStore, RollNumber, RosterImporter, StoreError, StudentProfile,
};

fn ayaan() -> StudentProfile {
    StudentProfile {
        roll_no: RollNumber("23BCS1001".to_string()),
        name: "Ayaan".to_string(),
        cgpa: 8.10,
        attendance_pct: 72,
        earned_credits: 18,
        disciplinary: DisciplinaryFlag::None,
    }
}

#[derive(Default)]
struct RecordingStore {
    saved: Mutex<Vec<EligibilityRecord>>,
}

impl EligibilityStore for RecordingStore {
    fn save(&self, record: EligibilityRecord) -> Result<(), StoreError> {
        self.saved.lock().expect("store mutex poisoned").push(record);
        Ok(())
    }

    fn fetch(&self, roll_no: &RollNumber) -> Result<Option<EligibilityRecord>, StoreError> {
        let saved = self.saved.lock().expect("store mutex poisoned");
        Ok(saved
            .iter()
            .rev()
            .find(|record| &record.roll_no == roll_no)
            .cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.saved.lock().expect("store mutex poisoned").len())
    }
}

#[test]
fn attendance_shortfall_stops_the_chain() {
    let engine = EligibilityEngine::standard(&EligibilityConfig::default());

    let outcome = engine.evaluate(&ayaan());

    assert_eq!(outcome.status, EligibilityStatus::NotEligible);
    assert_eq!(outcome.reasons, vec!["Attendance below 75%".to_string()]);
    assert_eq!(outcome.summary(), "NOT_ELIGIBLE: Attendance below 75%");
}

#[test]
fn standard_chain_orders_rules_by_priority() {
    let chain = standard_chain(&EligibilityConfig::default());
    assert_eq!(
        chain.rule_names(),
        vec!["disciplinary", "cgpa", "attendance", "credits"]
    );
}

#[test]
fn earlier_violation_masks_later_ones() {
    let config = EligibilityConfig::default();
    let rules: Vec<Box<dyn Rule<StudentProfile>>> = vec![
        Box::new(DisciplinaryRule),
        Box::new(CgpaRule {
            min_cgpa: config.min_cgpa,
        }),
        Box::new(AttendanceRule {
            min_attendance_pct: config.min_attendance_pct,
        }),
    ];
    let engine = EligibilityEngine::with_chain(RuleChain::new(rules));

    let profile = StudentProfile {
        cgpa: 5.2,
        ..ayaan()
    };
    let outcome = engine.evaluate(&profile);

    assert_eq!(outcome.reasons, vec!["CGPA below 6.0".to_string()]);
}

#[test]
fn custom_rules_extend_the_chain_without_touching_the_engine() {
    let chain = RuleChain::builder()
        .rule(DisciplinaryRule)
        .rule(rule_fn("roll_prefix", |profile: &StudentProfile| {
            (!profile.roll_no.0.starts_with("23")).then(|| "Batch not invited".to_string())
        }))
        .build();
    let engine = EligibilityEngine::with_chain(chain);

    let outcome = engine.evaluate(&StudentProfile {
        roll_no: RollNumber("22BCS0042".to_string()),
        ..ayaan()
    });

    assert_eq!(outcome.status, EligibilityStatus::NotEligible);
    assert_eq!(outcome.reasons, vec!["Batch not invited".to_string()]);
}

#[test]
fn service_records_each_roster_decision() {
    let csv = "roll_no,name,cgpa,attendance,credits,disciplinary\n\
               23BCS1001,Ayaan,8.10,72,18,NONE\n\
               23BCS1002,Meera,7.45,91,20,NONE\n\
               23BCS1003,Kabir,9.00,95,22,WARNING\n";
    let profiles = RosterImporter::from_reader(Cursor::new(csv)).expect("roster parses");
    assert_eq!(profiles.len(), 3);

    let store = Arc::new(RecordingStore::default());
    let service = EligibilityService::new(store.clone(), &EligibilityConfig::default());
    let outcomes = service.evaluate_all(&profiles);

    let statuses: Vec<_> = outcomes.iter().map(|outcome| outcome.status).collect();
    assert_eq!(
        statuses,
        vec![
            EligibilityStatus::NotEligible,
            EligibilityStatus::Eligible,
            EligibilityStatus::NotEligible,
        ]
    );
    assert_eq!(
        outcomes[2].reasons,
        vec!["Disciplinary flag present".to_string()]
    );
    assert_eq!(service.recorded().expect("count"), 3);

    let stored = service
        .get(&RollNumber("23BCS1002".to_string()))
        .expect("decision stored");
    assert_eq!(stored.status, EligibilityStatus::Eligible);
    assert!(stored.reasons.is_empty());
}

#[test]
fn repeated_evaluation_is_stable() {
    let engine = EligibilityEngine::standard(&EligibilityConfig::default());
    let profile = ayaan();

    assert_eq!(engine.evaluate(&profile), engine.evaluate(&profile));
}
