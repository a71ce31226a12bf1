//! Generate the reference-case evaluation record
//!
//! Emits the worked example (500k investment, 60 ramping monthly flows,
//! 12% TMA) as pretty JSON followed by a console summary. The rounded values
//! in this output are the golden fixture the tests assert against.

use anyhow::Result;
use investment_indicators::{ProjectEvaluation, ProjectInput};

fn main() -> Result<()> {
    env_logger::init();

    let input = ProjectInput::reference_case();
    let evaluation =
        ProjectEvaluation::new(input.investment_initial, &input.cash_flows, input.tma)?;

    println!("{}", evaluation.to_json_pretty()?);

    println!("\n{}", "=".repeat(60));
    println!("REFERENCE CASE SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Investment:  {:.2}", evaluation.investment_initial);
    println!("TMA:         {}% p.a.", evaluation.tma);
    println!("Periods:     {} months", evaluation.cash_flows.len());
    println!("\nNPV:         {:.2}", evaluation.indicators.npv);
    println!("IRR:         {:.2}% p.a.", evaluation.indicators.irr);
    println!("Payback:     {} months", evaluation.indicators.payback);
    println!("{}", "=".repeat(60));

    Ok(())
}
