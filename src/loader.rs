//! Load project definitions from JSON and cash-flow series from CSV
//!
//! The JSON format is the same record the evaluator emits (camelCase keys),
//! so an exported evaluation can be fed back in as input. The CSV format is
//! one row per month with `Period` and `CashFlow` columns.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("CSV rows in {path} are not in period order: row {row} has period {found}, expected {expected}")]
    PeriodOrder {
        path: PathBuf,
        row: usize,
        found: u32,
        expected: u32,
    },
}

/// A project to evaluate: upfront investment, hurdle rate, monthly flows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub investment_initial: f64,
    /// Annual hurdle rate as a percentage.
    pub tma: f64,
    pub cash_flows: Vec<f64>,
}

impl ProjectInput {
    /// The worked reference project: R$500k upfront, 60 monthly flows
    /// ramping up over year 1, peaking in year 3 and tapering through year 5,
    /// evaluated against a 12% annual hurdle rate.
    pub fn reference_case() -> Self {
        let mut flows = vec![20_000.0, 25_000.0, 30_000.0, 35_000.0, 40_000.0];
        flows.extend(std::iter::repeat(45_000.0).take(5));
        flows.extend(std::iter::repeat(50_000.0).take(14));
        flows.extend(std::iter::repeat(52_000.0).take(12));
        flows.extend(std::iter::repeat(48_000.0).take(6));
        flows.extend(std::iter::repeat(46_000.0).take(6));
        flows.extend(std::iter::repeat(44_000.0).take(6));
        flows.extend(std::iter::repeat(42_000.0).take(6));

        Self {
            investment_initial: 500_000.0,
            tma: 12.0,
            cash_flows: flows,
        }
    }
}

/// Raw CSV row with the expected column headers.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "CashFlow")]
    cash_flow: f64,
}

/// Load a full project definition from a JSON file.
pub fn load_project_json(path: &Path) -> Result<ProjectInput, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a monthly cash-flow series from a CSV file with `Period,CashFlow`
/// headers. Periods must be 1..=N in order; the investment and hurdle rate
/// come from elsewhere (CLI flags).
pub fn load_cash_flows_csv(path: &Path) -> Result<Vec<f64>, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut flows = Vec::new();
    for (row_idx, record) in reader.deserialize().enumerate() {
        let row: CsvRow = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let expected = row_idx as u32 + 1;
        if row.period != expected {
            return Err(LoadError::PeriodOrder {
                path: path.to_path_buf(),
                row: row_idx + 1,
                found: row.period,
                expected,
            });
        }
        flows.push(row.cash_flow);
    }

    log::debug!("loaded {} cash flow periods from {}", flows.len(), path.display());
    Ok(flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reference_case_shape() {
        let input = ProjectInput::reference_case();
        assert_eq!(input.cash_flows.len(), 60);
        assert_eq!(input.investment_initial, 500_000.0);
        assert_eq!(input.tma, 12.0);
        // Spot-check the ramp boundaries
        assert_eq!(input.cash_flows[0], 20_000.0);
        assert_eq!(input.cash_flows[11], 50_000.0);
        assert_eq!(input.cash_flows[24], 52_000.0);
        assert_eq!(input.cash_flows[59], 42_000.0);
        let total: f64 = input.cash_flows.iter().sum();
        assert_eq!(total, 2_779_000.0);
    }

    #[test]
    fn test_project_json_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("indicator_project_input_test.json");
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{"investmentInitial": 1000.0, "tma": 12.0, "cashFlows": [500.0, 600.0]}}"#
        )
        .unwrap();

        let input = load_project_json(&path).unwrap();
        assert_eq!(input.investment_initial, 1000.0);
        assert_eq!(input.tma, 12.0);
        assert_eq!(input.cash_flows, vec![500.0, 600.0]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_cash_flows_csv() {
        let dir = std::env::temp_dir();
        let path = dir.join("indicator_cashflows_test.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Period,CashFlow").unwrap();
        writeln!(file, "1,20000").unwrap();
        writeln!(file, "2,25000").unwrap();
        writeln!(file, "3,30000").unwrap();

        let flows = load_cash_flows_csv(&path).unwrap();
        assert_eq!(flows, vec![20_000.0, 25_000.0, 30_000.0]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_csv_out_of_order_rejected() {
        let dir = std::env::temp_dir();
        let path = dir.join("indicator_cashflows_order_test.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Period,CashFlow").unwrap();
        writeln!(file, "1,20000").unwrap();
        writeln!(file, "3,30000").unwrap();

        let err = load_cash_flows_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::PeriodOrder { found: 3, expected: 2, .. }));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_project_json(Path::new("/nonexistent/project.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
