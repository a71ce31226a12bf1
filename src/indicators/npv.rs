//! Net Present Value calculation
//!
//! Discounts each monthly cash flow at the periodic rate and nets the result
//! against the upfront investment.

/// Calculate the Net Present Value of an investment project.
///
/// # Arguments
/// * `investment` - Upfront outflow at period 0 (entered as a positive amount)
/// * `cash_flows` - Monthly inflows for periods 1..=N, chronological order
/// * `periodic_rate` - Monthly discount rate as a decimal (see
///   [`annual_to_periodic`](super::rate::annual_to_periodic))
///
/// # Returns
/// `-investment + sum(F[i] / (1 + r)^i)`. Positive means the project creates
/// value at the given discount rate. Pure and deterministic; extreme inputs
/// follow IEEE overflow semantics rather than being guarded here.
pub fn net_present_value(investment: f64, cash_flows: &[f64], periodic_rate: f64) -> f64 {
    let discounted: f64 = cash_flows
        .iter()
        .enumerate()
        .map(|(i, &cf)| cf / (1.0 + periodic_rate).powi(i as i32 + 1))
        .sum();

    -investment + discounted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::rate::annual_to_periodic;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_plain_sum() {
        let flows = vec![100.0, 200.0, 300.0];
        let npv = net_present_value(450.0, &flows, 0.0);
        assert_relative_eq!(npv, 150.0, max_relative = 1e-12);
    }

    #[test]
    fn test_two_period_case() {
        // Investment 1000, single inflow 1100, rate ~0 => NPV ~ 100
        let npv = net_present_value(1000.0, &[1100.0, 0.0], 0.0);
        assert_relative_eq!(npv, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_strictly_decreasing_in_rate() {
        let flows = vec![50_000.0; 24];
        let mut prev = f64::INFINITY;
        for rate in [0.0, 0.005, 0.01, 0.02, 0.05, 0.10] {
            let npv = net_present_value(500_000.0, &flows, rate);
            assert!(npv < prev, "NPV not decreasing at rate {}", rate);
            prev = npv;
        }
    }

    #[test]
    fn test_discounting_single_flow() {
        // 110 one month out at 10% monthly discounts to 100
        let npv = net_present_value(0.0, &[110.0], 0.10);
        assert_relative_eq!(npv, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_flows_yield_negated_investment() {
        let npv = net_present_value(1000.0, &[], annual_to_periodic(12.0));
        assert_relative_eq!(npv, -1000.0, max_relative = 1e-12);
    }
}
