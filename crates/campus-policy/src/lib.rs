//! Campus policy workflows built on two pure mechanisms: short-circuit rule
//! chains and first-match strategy tables.

pub mod config;
pub mod error;
pub mod policy;
pub mod telemetry;
pub mod workflows;
