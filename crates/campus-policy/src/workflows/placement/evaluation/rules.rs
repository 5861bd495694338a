use super::super::domain::StudentProfile;
use super::config::EligibilityConfig;
use crate::policy::{Rule, RuleChain};

pub struct DisciplinaryRule;

impl Rule<StudentProfile> for DisciplinaryRule {
    fn name(&self) -> &str {
        "disciplinary"
    }

    fn check(&self, profile: &StudentProfile) -> Option<String> {
        profile
            .disciplinary
            .is_flagged()
            .then(|| "Disciplinary flag present".to_string())
    }
}

pub struct CgpaRule {
    pub min_cgpa: f64,
}

impl Rule<StudentProfile> for CgpaRule {
    fn name(&self) -> &str {
        "cgpa"
    }

    fn check(&self, profile: &StudentProfile) -> Option<String> {
        // NaN compares false against everything, so test finiteness first.
        if !profile.cgpa.is_finite() || profile.cgpa < self.min_cgpa {
            return Some(format!("CGPA below {}", threshold_label(self.min_cgpa)));
        }
        None
    }
}

/// Shortest form that still shows every configured digit, with at least one decimal.
fn threshold_label(value: f64) -> String {
    let label = value.to_string();
    if label.contains('.') || !value.is_finite() {
        label
    } else {
        format!("{value:.1}")
    }
}

pub struct AttendanceRule {
    pub min_attendance_pct: u8,
}

impl Rule<StudentProfile> for AttendanceRule {
    fn name(&self) -> &str {
        "attendance"
    }

    fn check(&self, profile: &StudentProfile) -> Option<String> {
        (profile.attendance_pct < self.min_attendance_pct)
            .then(|| format!("Attendance below {}%", self.min_attendance_pct))
    }
}

pub struct CreditsRule {
    pub min_credits: u16,
}

impl Rule<StudentProfile> for CreditsRule {
    fn name(&self) -> &str {
        "credits"
    }

    fn check(&self, profile: &StudentProfile) -> Option<String> {
        (profile.earned_credits < self.min_credits)
            .then(|| format!("Credits below {}", self.min_credits))
    }
}

/// Disciplinary standing first, then CGPA, attendance, and credits.
pub fn standard_chain(config: &EligibilityConfig) -> RuleChain<StudentProfile> {
    RuleChain::builder()
        .rule(DisciplinaryRule)
        .rule(CgpaRule {
            min_cgpa: config.min_cgpa,
        })
        .rule(AttendanceRule {
            min_attendance_pct: config.min_attendance_pct,
        })
        .rule(CreditsRule {
            min_credits: config.min_credits,
        })
        .build()
}
