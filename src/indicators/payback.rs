//! Simple payback period calculation
//!
//! Accumulates undiscounted monthly inflows until they cover the upfront
//! investment. Recovery and non-recovery are distinct variants; the original
//! convention of returning the series length for "never recovered" made that
//! case indistinguishable from a genuine break-even in the last month.

/// Outcome of a payback calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payback {
    /// Cumulative inflows first reached the investment at this period (1-based).
    Recovered(u32),
    /// The investment is not recovered within the observed horizon.
    NotRecovered,
}

impl Payback {
    /// Recovery period, if any.
    pub fn period(&self) -> Option<u32> {
        match *self {
            Payback::Recovered(period) => Some(period),
            Payback::NotRecovered => None,
        }
    }

    /// Collapse to the legacy integer convention: the recovery period, or the
    /// horizon length when not recovered. Used for report output compatible
    /// with the reference JSON.
    pub fn period_or_horizon(&self, horizon: usize) -> u32 {
        match *self {
            Payback::Recovered(period) => period,
            Payback::NotRecovered => horizon as u32,
        }
    }
}

/// Find the first period at which cumulative inflows meet the investment.
///
/// # Arguments
/// * `investment` - Upfront outflow, entered positive
/// * `cash_flows` - Monthly inflows for periods 1..=N
pub fn payback_period(investment: f64, cash_flows: &[f64]) -> Payback {
    let mut cumulative = 0.0;
    for (i, &cf) in cash_flows.iter().enumerate() {
        cumulative += cf;
        if cumulative >= investment {
            return Payback::Recovered(i as u32 + 1);
        }
    }
    Payback::NotRecovered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_mid_series() {
        // Cumulative 200k, 400k, 600k: crosses 500k at period 3
        let payback = payback_period(500_000.0, &[200_000.0, 200_000.0, 200_000.0]);
        assert_eq!(payback, Payback::Recovered(3));
    }

    #[test]
    fn test_exact_recovery_counts() {
        // >= comparison: hitting the investment exactly recovers
        let payback = payback_period(200.0, &[100.0, 100.0]);
        assert_eq!(payback, Payback::Recovered(2));
    }

    #[test]
    fn test_not_recovered_is_distinct_from_last_period() {
        let shortfall = payback_period(250.0, &[100.0, 100.0]);
        let break_even = payback_period(200.0, &[100.0, 100.0]);

        assert_eq!(shortfall, Payback::NotRecovered);
        assert_ne!(shortfall, break_even);
        assert_eq!(shortfall.period(), None);
        // Legacy convention collapses both to 2
        assert_eq!(shortfall.period_or_horizon(2), 2);
        assert_eq!(break_even.period_or_horizon(2), 2);
    }

    #[test]
    fn test_first_period_recovery() {
        let payback = payback_period(50.0, &[100.0, 100.0]);
        assert_eq!(payback, Payback::Recovered(1));
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(payback_period(100.0, &[]), Payback::NotRecovered);
    }
}
