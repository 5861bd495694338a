use std::collections::BTreeMap;

use crate::policy::{rule_fn, Rule, RuleChain};

pub type RawFields = BTreeMap<String, String>;

pub const PROGRAMS: [&str; 3] = ["CSE", "AI", "SWE"];

fn field<'a>(fields: &'a RawFields, key: &str) -> &'a str {
    fields.get(key).map(String::as_str).unwrap_or("")
}

/// Fails when the field is absent or blank.
pub struct RequiredField {
    pub key: &'static str,
}

impl Rule<RawFields> for RequiredField {
    fn name(&self) -> &str {
        self.key
    }

    fn check(&self, fields: &RawFields) -> Option<String> {
        field(fields, self.key)
            .is_empty()
            .then(|| format!("{} is required", self.key))
    }
}

/// Every field check; run with `RuleChain::audit` so all problems are reported together.
pub fn registration_rules() -> RuleChain<RawFields> {
    RuleChain::builder()
        .rule(RequiredField { key: "name" })
        .rule(rule_fn("email", |fields: &RawFields| {
            let email = field(fields, "email");
            (email.is_empty() || !email.contains('@')).then(|| "email is invalid".to_string())
        }))
        .rule(rule_fn("phone", |fields: &RawFields| {
            let phone = field(fields, "phone");
            let valid = phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit());
            (!valid).then(|| "phone is invalid".to_string())
        }))
        .rule(rule_fn("program", |fields: &RawFields| {
            let program = field(fields, "program");
            (!PROGRAMS.contains(&program)).then(|| "program is invalid".to_string())
        }))
        .build()
}
