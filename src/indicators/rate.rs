//! Discount rate conversion and solver tuning constants
//!
//! Rates arrive as annual percentages (the TMA, e.g. 12.0 for 12%) and all
//! discounting happens at monthly resolution, so the annual rate is converted
//! to its compound-equivalent monthly rate before use.

/// Compounding periods per year. Cash flows are monthly throughout.
pub const PERIODS_PER_YEAR: u32 = 12;

/// First secant trial rate (10% monthly).
pub const IRR_INITIAL_RATE_0: f64 = 0.10;

/// Second secant trial rate (11% monthly).
pub const IRR_INITIAL_RATE_1: f64 = 0.11;

/// Iteration cap for the secant solver.
pub const IRR_MAX_ITERATIONS: u32 = 100;

/// Convergence threshold on |NPV| at the trial rate.
pub const IRR_CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// Threshold below which the secant denominator is treated as collapsed.
pub const IRR_DENOMINATOR_TOLERANCE: f64 = 1e-9;

/// Convert an annual percentage rate to the equivalent periodic decimal rate.
///
/// `(1 + annual/100)^(1/12) - 1`, so that compounding the periodic rate over
/// twelve months reproduces the annual rate exactly.
///
/// Undefined for `annual_pct <= -100.0` (not guarded; hurdle rates are
/// expected to be well above total loss).
pub fn annual_to_periodic(annual_pct: f64) -> f64 {
    (1.0 + annual_pct / 100.0).powf(1.0 / PERIODS_PER_YEAR as f64) - 1.0
}

/// Convert a periodic decimal rate back to an annual percentage.
///
/// Inverse of [`annual_to_periodic`]: `((1 + periodic)^12 - 1) * 100`.
pub fn periodic_to_annual_pct(periodic: f64) -> f64 {
    ((1.0 + periodic).powi(PERIODS_PER_YEAR as i32) - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_maps_to_zero() {
        assert_eq!(annual_to_periodic(0.0), 0.0);
    }

    #[test]
    fn test_twelve_pct_annual() {
        // (1.12)^(1/12) - 1
        let monthly = annual_to_periodic(12.0);
        assert_relative_eq!(monthly, 0.009488792934583046, max_relative = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let annual = 12.0;
        let back = periodic_to_annual_pct(annual_to_periodic(annual));
        assert_relative_eq!(back, annual, max_relative = 1e-10);
    }

    #[test]
    fn test_annualization_of_ten_pct_monthly() {
        // 10% monthly compounds to ~213.84% annually
        let annual = periodic_to_annual_pct(0.10);
        assert!((annual - 213.84).abs() < 0.01, "got {}", annual);
    }
}
