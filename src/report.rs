//! Evaluation record assembly
//!
//! Runs all three indicators over a project and packages the results in the
//! JSON shape consumed by reporting tools: `investmentInitial`, `cashFlows`,
//! `tma`, and `indicators { npv, irr, payback }`, with values rounded to two
//! decimals. The indicator functions themselves return unrounded values;
//! rounding happens only here, at the presentation boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::{
    annual_to_periodic, internal_rate_of_return, net_present_value, payback_period, IrrResult,
    Payback,
};

/// Input problems rejected before any indicator runs.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("cash flow series is empty")]
    EmptyCashFlows,
    #[error("investment must be a finite non-negative amount, got {0}")]
    InvalidInvestment(f64),
}

/// Unrounded indicator values for one project.
#[derive(Debug, Clone)]
pub struct Indicators {
    pub npv: f64,
    pub irr: IrrResult,
    pub payback: Payback,
}

/// Run NPV, IRR, and payback over a project.
///
/// # Arguments
/// * `investment` - Upfront outflow at period 0, entered positive
/// * `cash_flows` - Monthly inflows for periods 1..=N
/// * `tma_annual_pct` - Annual hurdle rate as a percentage (12.0 = 12%)
///
/// Rejects empty series and invalid investments explicitly; the individual
/// indicator functions never error (see [`crate::indicators`]).
pub fn evaluate(
    investment: f64,
    cash_flows: &[f64],
    tma_annual_pct: f64,
) -> Result<Indicators, EvaluationError> {
    if cash_flows.is_empty() {
        return Err(EvaluationError::EmptyCashFlows);
    }
    if !investment.is_finite() || investment < 0.0 {
        return Err(EvaluationError::InvalidInvestment(investment));
    }

    let periodic_rate = annual_to_periodic(tma_annual_pct);

    Ok(Indicators {
        npv: net_present_value(investment, cash_flows, periodic_rate),
        irr: internal_rate_of_return(investment, cash_flows),
        payback: payback_period(investment, cash_flows),
    })
}

/// Serializable evaluation record, rounded for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEvaluation {
    pub investment_initial: f64,
    pub cash_flows: Vec<f64>,
    /// Annual hurdle rate as a percentage.
    pub tma: f64,
    pub indicators: IndicatorSet,
}

/// Rounded indicator block of a [`ProjectEvaluation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// Net present value, currency units, 2 decimals.
    pub npv: f64,
    /// Annual IRR percentage, 2 decimals.
    pub irr: f64,
    /// Recovery period in months; equals the series length when the
    /// investment is never recovered (legacy reporting convention).
    pub payback: u32,
}

impl ProjectEvaluation {
    /// Evaluate a project and build the rounded record.
    pub fn new(
        investment: f64,
        cash_flows: &[f64],
        tma_annual_pct: f64,
    ) -> Result<Self, EvaluationError> {
        let indicators = evaluate(investment, cash_flows, tma_annual_pct)?;

        Ok(Self {
            investment_initial: investment,
            cash_flows: cash_flows.to_vec(),
            tma: tma_annual_pct,
            indicators: IndicatorSet {
                npv: round2(indicators.npv),
                irr: round2(indicators.irr.annual_pct),
                payback: indicators.payback.period_or_horizon(cash_flows.len()),
            },
        })
    }

    /// Pretty-printed JSON, the interchange format of the record.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Round to 2 decimal places (presentation only).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
