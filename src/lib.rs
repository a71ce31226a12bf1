//! Investment Indicators - capital-budgeting indicator engine
//!
//! This library provides:
//! - Net Present Value with annual-to-monthly rate conversion
//! - Internal Rate of Return via the secant method, with explicit
//!   convergence outcomes
//! - Simple payback period with a distinguishable not-recovered result
//! - Evaluation records in the reporting JSON shape, plus JSON/CSV input
//!   loading

pub mod indicators;
pub mod loader;
pub mod report;

// Re-export commonly used types
pub use indicators::{
    annual_to_periodic, internal_rate_of_return, net_present_value, payback_period, IrrOutcome,
    IrrResult, Payback,
};
pub use loader::ProjectInput;
pub use report::{evaluate, EvaluationError, IndicatorSet, Indicators, ProjectEvaluation};
