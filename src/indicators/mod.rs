//! Capital-budgeting indicator engine
//!
//! Three pure indicators over an upfront investment and a series of monthly
//! cash inflows:
//! - Net Present Value at a given annual hurdle rate (TMA)
//! - Internal Rate of Return via the secant method
//! - Simple payback period
//!
//! All functions are pure and side-effect free; they share no state and may
//! run concurrently without synchronization.

pub mod irr;
pub mod npv;
pub mod payback;
pub mod rate;

pub use irr::{internal_rate_of_return, IrrOutcome, IrrResult};
pub use npv::net_present_value;
pub use payback::{payback_period, Payback};
pub use rate::{annual_to_periodic, periodic_to_annual_pct, PERIODS_PER_YEAR};
