//! Investment Indicators CLI
//!
//! Evaluates a project from a JSON definition or a CSV cash-flow series and
//! prints NPV, IRR, and payback. With no input it runs the built-in reference
//! case. `--json` emits the evaluation record for API integration.

use anyhow::{bail, Context, Result};
use clap::Parser;
use investment_indicators::loader::{load_cash_flows_csv, load_project_json};
use investment_indicators::{evaluate, Payback, ProjectEvaluation, ProjectInput};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "investment_indicators", version, about = "Capital-budgeting indicators: NPV, IRR, payback")]
struct Args {
    /// Project definition JSON (investmentInitial, tma, cashFlows)
    input: Option<PathBuf>,

    /// Monthly cash-flow CSV (Period,CashFlow); requires --investment and --tma
    #[arg(long, conflicts_with = "input")]
    csv: Option<PathBuf>,

    /// Upfront investment (used with --csv)
    #[arg(long)]
    investment: Option<f64>,

    /// Annual hurdle rate percent (used with --csv)
    #[arg(long)]
    tma: Option<f64>,

    /// Emit the evaluation record as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = if let Some(path) = &args.input {
        load_project_json(path).with_context(|| format!("loading {}", path.display()))?
    } else if let Some(path) = &args.csv {
        let (Some(investment), Some(tma)) = (args.investment, args.tma) else {
            bail!("--csv requires --investment and --tma");
        };
        ProjectInput {
            investment_initial: investment,
            tma,
            cash_flows: load_cash_flows_csv(path)
                .with_context(|| format!("loading {}", path.display()))?,
        }
    } else {
        ProjectInput::reference_case()
    };

    if args.json {
        let evaluation =
            ProjectEvaluation::new(input.investment_initial, &input.cash_flows, input.tma)?;
        println!("{}", evaluation.to_json_pretty()?);
        return Ok(());
    }

    let indicators = evaluate(input.investment_initial, &input.cash_flows, input.tma)?;

    println!("Investment Indicators v0.1.0");
    println!("============================\n");
    println!("Investment:  {:.2}", input.investment_initial);
    println!("TMA:         {}% p.a.", input.tma);
    println!("Periods:     {} months\n", input.cash_flows.len());
    println!("NPV:         {:.2}", indicators.npv);
    println!(
        "IRR:         {:.2}% p.a.{}",
        indicators.irr.annual_pct,
        if indicators.irr.converged() { "" } else { "  (did not converge)" }
    );
    match indicators.payback {
        Payback::Recovered(period) => println!("Payback:     {} months", period),
        Payback::NotRecovered => println!(
            "Payback:     not recovered within {} months",
            input.cash_flows.len()
        ),
    }

    Ok(())
}
