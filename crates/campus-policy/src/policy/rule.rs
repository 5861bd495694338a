use std::fmt;

use serde::{Deserialize, Serialize};

/// A named check over a subject. `None` means the subject passes.
pub trait Rule<S: ?Sized>: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, subject: &S) -> Option<String>;
}

/// Binary classification produced by a rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Pass,
    Fail,
}

impl EvaluationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EvaluationStatus::Pass => "pass",
            EvaluationStatus::Fail => "fail",
        }
    }
}

/// Status plus the violation reasons collected before evaluation stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub status: EvaluationStatus,
    pub reasons: Vec<String>,
}

impl EvaluationResult {
    pub fn pass() -> Self {
        Self {
            status: EvaluationStatus::Pass,
            reasons: Vec::new(),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.status == EvaluationStatus::Pass
    }

    pub fn first_reason(&self) -> Option<&str> {
        self.reasons.first().map(String::as_str)
    }

    fn from_reasons(reasons: Vec<String>) -> Self {
        let status = if reasons.is_empty() {
            EvaluationStatus::Pass
        } else {
            EvaluationStatus::Fail
        };
        Self { status, reasons }
    }
}

/// Ordered, immutable sequence of rules. The order is the priority order.
pub struct RuleChain<S: ?Sized> {
    rules: Vec<Box<dyn Rule<S>>>,
}

impl<S: ?Sized> RuleChain<S> {
    pub fn new(rules: Vec<Box<dyn Rule<S>>>) -> Self {
        Self { rules }
    }

    pub fn builder() -> RuleChainBuilder<S> {
        RuleChainBuilder { rules: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Stops at the first violation; later rules are never consulted.
    pub fn evaluate(&self, subject: &S) -> EvaluationResult {
        evaluate(&self.rules, subject)
    }

    /// Runs every rule and reports all violations in chain order.
    pub fn audit(&self, subject: &S) -> EvaluationResult {
        let reasons = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(subject))
            .collect();
        EvaluationResult::from_reasons(reasons)
    }
}

impl<S: ?Sized> fmt::Debug for RuleChain<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rule_names())
            .finish()
    }
}

pub struct RuleChainBuilder<S: ?Sized> {
    rules: Vec<Box<dyn Rule<S>>>,
}

impl<S: ?Sized> RuleChainBuilder<S> {
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<S> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn build(self) -> RuleChain<S> {
        RuleChain::new(self.rules)
    }
}

/// Short-circuit evaluation over an ordered slice of rules.
pub fn evaluate<S: ?Sized>(rules: &[Box<dyn Rule<S>>], subject: &S) -> EvaluationResult {
    for rule in rules {
        if let Some(reason) = rule.check(subject) {
            tracing::debug!(rule = rule.name(), %reason, "rule chain stopped at violation");
            return EvaluationResult {
                status: EvaluationStatus::Fail,
                reasons: vec![reason],
            };
        }
    }

    EvaluationResult::pass()
}

/// Rule backed by a closure.
pub struct FnRule<F> {
    name: String,
    check: F,
}

pub fn rule_fn<S, F>(name: impl Into<String>, check: F) -> FnRule<F>
where
    S: ?Sized,
    F: Fn(&S) -> Option<String> + Send + Sync,
{
    FnRule {
        name: name.into(),
        check,
    }
}

impl<S, F> Rule<S> for FnRule<F>
where
    S: ?Sized,
    F: Fn(&S) -> Option<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, subject: &S) -> Option<String> {
        (self.check)(subject)
    }
}
