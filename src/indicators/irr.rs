//! Internal Rate of Return (IRR) calculation
//!
//! Finds the monthly rate at which the project NPV is zero using the secant
//! method, then annualizes it. The secant method needs no derivative and
//! handles irregular flow profiles better than Newton-Raphson from a fixed
//! starting point.
//!
//! Numerical instabilities are absorbed rather than raised: rates at or below
//! -100% are clamped before evaluation, overflowing discount factors push the
//! iteration back with signed-infinity NPVs, and a collapsed secant
//! denominator falls back to a 0% rate. The caller sees the stopping reason
//! in [`IrrOutcome`] but never an error.

use super::rate::{
    periodic_to_annual_pct, IRR_CONVERGENCE_TOLERANCE, IRR_DENOMINATOR_TOLERANCE,
    IRR_INITIAL_RATE_0, IRR_INITIAL_RATE_1, IRR_MAX_ITERATIONS,
};

/// How the secant iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrOutcome {
    /// |NPV| fell below the convergence tolerance.
    Converged { iterations: u32 },
    /// The secant denominator collapsed (the two trial NPVs were nearly
    /// identical); the rate is the documented 0% fallback, not a root.
    DegenerateDenominator { iterations: u32 },
    /// The iteration cap was hit; the last trial rate is reported as-is.
    MaxIterationsExceeded,
}

/// Result of an IRR solve. The numeric fields carry the documented fallback
/// values in every outcome; the tag tells the caller how much to trust them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrResult {
    /// Annualized rate as a percentage (e.g. 161.06 for 161.06% a year).
    /// Floored at -100.0 when the periodic rate diverges below total loss.
    pub annual_pct: f64,
    /// The underlying monthly rate as a decimal.
    pub periodic_rate: f64,
    pub outcome: IrrOutcome,
}

impl IrrResult {
    /// True only when the solver actually found a root.
    pub fn converged(&self) -> bool {
        matches!(self.outcome, IrrOutcome::Converged { .. })
    }
}

/// Calculate the IRR for an investment followed by monthly cash flows.
///
/// # Arguments
/// * `investment` - Upfront outflow, entered positive; becomes the period-0
///   flow `-investment`
/// * `cash_flows` - Monthly inflows for periods 1..=N
///
/// # Returns
/// [`IrrResult`] with the annualized percentage rate. Never errors: a
/// collapsed denominator yields 0.0% and divergence below -100% monthly
/// yields the -100.0 annual floor, both tagged in the outcome.
pub fn internal_rate_of_return(investment: f64, cash_flows: &[f64]) -> IrrResult {
    let mut combined = Vec::with_capacity(cash_flows.len() + 1);
    combined.push(-investment);
    combined.extend_from_slice(cash_flows);

    let mut rate0 = IRR_INITIAL_RATE_0;
    let mut rate1 = IRR_INITIAL_RATE_1;
    let mut npv0 = npv_at_rate(&combined, rate0);
    let mut npv1 = npv_at_rate(&combined, rate1);

    let mut outcome = IrrOutcome::MaxIterationsExceeded;

    for iteration in 0..IRR_MAX_ITERATIONS {
        if npv1.abs() < IRR_CONVERGENCE_TOLERANCE {
            log::debug!("IRR converged after {} iterations (rate {:.6})", iteration, rate1);
            outcome = IrrOutcome::Converged { iterations: iteration };
            break;
        }

        if (npv1 - npv0).abs() < IRR_DENOMINATOR_TOLERANCE {
            log::warn!(
                "IRR secant denominator collapsed after {} iterations, returning 0% fallback",
                iteration
            );
            return IrrResult {
                annual_pct: 0.0,
                periodic_rate: 0.0,
                outcome: IrrOutcome::DegenerateDenominator { iterations: iteration },
            };
        }

        let next = rate1 - npv1 * (rate1 - rate0) / (npv1 - npv0);
        rate0 = rate1;
        npv0 = npv1;
        rate1 = next;
        npv1 = npv_at_rate(&combined, rate1);
    }

    if outcome == IrrOutcome::MaxIterationsExceeded {
        log::warn!(
            "IRR did not converge within {} iterations, using last rate {:.6} (residual {:.3e})",
            IRR_MAX_ITERATIONS,
            rate1,
            npv1
        );
    }

    let annual_pct = if rate1 > -1.0 {
        periodic_to_annual_pct(rate1)
    } else {
        -100.0
    };

    IrrResult {
        annual_pct,
        periodic_rate: rate1,
        outcome,
    }
}

/// NPV of the combined flow vector (period 0 included) at a trial rate.
///
/// Rates at or below -1 are clamped to -0.9999 before evaluation so the
/// discount base stays positive. If a discount factor or the sum overflows,
/// returns +inf for positive rates and -inf otherwise, steering the secant
/// step away from the unstable region.
fn npv_at_rate(combined_flows: &[f64], rate: f64) -> f64 {
    let clamped = if rate <= -1.0 { -0.9999 } else { rate };

    let mut total = 0.0;
    for (i, &cf) in combined_flows.iter().enumerate() {
        let divisor = (1.0 + clamped).powi(i as i32);
        if !divisor.is_finite() {
            return overflow_sentinel(rate);
        }
        total += cf / divisor;
    }

    if total.is_finite() {
        total
    } else {
        overflow_sentinel(rate)
    }
}

fn overflow_sentinel(rate: f64) -> f64 {
    if rate > 0.0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}
