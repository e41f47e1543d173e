//! wikiPlt - Runge-Kutta comparison chart viewer
//!
//! Loads a CSV with a time column and three solver series and shows them
//! as one line chart. The `generate_sample` binary produces that CSV.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod solver;

use anyhow::{Context, Result};
use charts::ChartSpec;
use config::ChartSettings;
use data::{DataLoader, DataProcessor};

/// Load the configured CSV and build the chart, without opening a window.
pub fn build_chart(settings: &ChartSettings) -> Result<ChartSpec> {
    let table = DataLoader::load_csv(&settings.csv_path)?;
    let series = DataProcessor::extract_series(&table)
        .with_context(|| format!("Selecting columns from {}", table.path().display()))?;
    Ok(ChartSpec::from_series(&series, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LoaderError, ProcessorError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn settings_for(file: &NamedTempFile) -> ChartSettings {
        ChartSettings::default().with_csv_path(file.path())
    }

    #[test]
    fn four_column_file_end_to_end() {
        let file = csv_file("t,A,B,C\n0,1,2,3\n1,4,5,6\n");
        let spec = build_chart(&settings_for(&file)).unwrap();

        assert_eq!(spec.labels(), vec!["A", "B", "C"]);
        assert_eq!(spec.traces[0].points, vec![[0.0, 1.0], [1.0, 4.0]]);
        assert_eq!(spec.traces[1].points, vec![[0.0, 2.0], [1.0, 5.0]]);
        assert_eq!(spec.traces[2].points, vec![[0.0, 3.0], [1.0, 6.0]]);
    }

    #[test]
    fn short_file_fails_before_chart() {
        let file = csv_file("t,A,B\n0,1,2\n");
        let err = build_chart(&settings_for(&file)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProcessorError>(),
            Some(ProcessorError::MissingColumn { .. })
        ));
    }

    #[test]
    fn missing_file_fails_with_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ChartSettings::default().with_csv_path(dir.path().join("nope.csv"));
        let err = build_chart(&settings).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LoaderError>(),
            Some(LoaderError::NotFound { .. })
        ));
    }

    #[test]
    fn header_only_file_gives_empty_chart_every_time() {
        let file = csv_file("t,A,B,C\n");
        let first = build_chart(&settings_for(&file)).unwrap();
        let second = build_chart(&settings_for(&file)).unwrap();

        assert_eq!(first.point_counts(), vec![0, 0, 0]);
        assert_eq!(first, second);
    }

    #[test]
    fn error_chain_prints_cause_once() {
        let file = csv_file("t,A,B,C\nzero,1,2,3\n");
        let err = build_chart(&settings_for(&file)).unwrap_err();

        let cause = err.root_cause().to_string();
        let chain = format!("{err:#}");
        assert_eq!(chain.matches(cause.as_str()).count(), 1, "{chain}");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let file = csv_file("t,x,y,z\n0,2,2,2\n0.5,2,2.1,2.2\n1,2.3,2.4,2.5\n");
        let first = build_chart(&settings_for(&file)).unwrap();
        let second = build_chart(&settings_for(&file)).unwrap();

        assert_eq!(first.bounds(), second.bounds());
        assert_eq!(first.point_counts(), vec![3, 3, 3]);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
