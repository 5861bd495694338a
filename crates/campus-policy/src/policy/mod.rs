//! Ordered rule chains and first-match strategy tables shared by every workflow.
//!
//! Both mechanisms are pure: the rule and strategy collections are fixed at
//! construction and every call works only on caller-owned inputs. Violations and
//! unmatched discriminants are ordinary return values, never errors.

mod money;
mod rule;
mod strategy;

pub use money::Money;
pub use rule::{
    evaluate, rule_fn, EvaluationResult, EvaluationStatus, FnRule, Rule, RuleChain,
    RuleChainBuilder,
};
pub use strategy::{
    resolve, strategy_fn, Fixed, FnStrategy, Resolution, Strategy, StrategyTable,
    StrategyTableBuilder,
};
