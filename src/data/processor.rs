//! Data Processor Module
//! Positional column extraction: column 0 is time, columns 1..=3 are series.

use crate::data::Table;
use log::warn;
use polars::prelude::*;
use thiserror::Error;

/// Number of dependent series plotted against time.
pub const SERIES_COUNT: usize = 3;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Column {index} requested but the table has only {available} columns")]
    MissingColumn { index: usize, available: usize },
    #[error("Column is not numeric")]
    PolarsError(#[from] PolarsError),
}

/// One named column widened to f64.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<f64>,
}

impl NumericColumn {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Time axis plus the dependent series, in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    pub time: NumericColumn,
    pub series: [NumericColumn; SERIES_COUNT],
}

pub struct DataProcessor;

impl DataProcessor {
    /// Extract the column at `index` as f64 values.
    ///
    /// Null cells become NaN. Text that is not a number is an error.
    pub fn column_at(table: &Table, index: usize) -> Result<NumericColumn, ProcessorError> {
        let columns = table.dataframe().get_columns();
        let column = columns.get(index).ok_or(ProcessorError::MissingColumn {
            index,
            available: columns.len(),
        })?;

        let casted = column.strict_cast(&DataType::Float64)?;
        let ca = casted.f64()?;
        let values: Vec<f64> = ca.iter().map(|v| v.unwrap_or(f64::NAN)).collect();

        if ca.null_count() > 0 {
            warn!(
                "Column {} '{}' has {} missing values",
                index,
                column.name(),
                ca.null_count()
            );
        }

        Ok(NumericColumn {
            name: column.name().to_string(),
            values,
        })
    }

    /// Split the table into time and the three series.
    ///
    /// All four columns are resolved before anything is returned, so a short
    /// table never yields a partial set.
    pub fn extract_series(table: &Table) -> Result<SeriesSet, ProcessorError> {
        let available = table.column_count();
        if available < SERIES_COUNT + 1 {
            return Err(ProcessorError::MissingColumn {
                index: available,
                available,
            });
        }

        let time = Self::column_at(table, 0)?;
        let series = [
            Self::column_at(table, 1)?,
            Self::column_at(table, 2)?,
            Self::column_at(table, 3)?,
        ];

        Ok(SeriesSet { time, series })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(df: DataFrame) -> Table {
        Table::new(df, "memory.csv")
    }

    #[test]
    fn extracts_time_and_series_by_position() {
        let df = df!(
            "t" => [0i64, 1],
            "A" => [1i64, 4],
            "B" => [2i64, 5],
            "C" => [3i64, 6],
        )
        .unwrap();

        let set = DataProcessor::extract_series(&table(df)).unwrap();

        assert_eq!(set.time.values, vec![0.0, 1.0]);
        assert_eq!(set.series[0].name, "A");
        assert_eq!(set.series[0].values, vec![1.0, 4.0]);
        assert_eq!(set.series[1].name, "B");
        assert_eq!(set.series[1].values, vec![2.0, 5.0]);
        assert_eq!(set.series[2].name, "C");
        assert_eq!(set.series[2].values, vec![3.0, 6.0]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let df = df!(
            "t" => [0.0, 0.5],
            "a" => [1.0, 2.0],
            "b" => [1.0, 2.0],
            "c" => [1.0, 2.0],
            "d" => [9.0, 9.0],
        )
        .unwrap();

        let set = DataProcessor::extract_series(&table(df)).unwrap();
        assert_eq!(set.series.map(|s| s.name), ["a", "b", "c"].map(String::from));
    }

    #[test]
    fn too_few_columns_is_missing_column() {
        let df = df!(
            "t" => [0.0],
            "A" => [1.0],
            "B" => [2.0],
        )
        .unwrap();

        match DataProcessor::extract_series(&table(df)) {
            Err(ProcessorError::MissingColumn { index, available }) => {
                assert_eq!(index, 3);
                assert_eq!(available, 3);
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn column_at_out_of_range() {
        let df = df!("t" => [0.0]).unwrap();
        assert!(matches!(
            DataProcessor::column_at(&table(df), 1),
            Err(ProcessorError::MissingColumn {
                index: 1,
                available: 1
            })
        ));
    }

    #[test]
    fn nulls_become_nan() {
        let df = df!(
            "t" => [Some(0.0), Some(1.0)],
            "A" => [Some(1.0), None],
        )
        .unwrap();

        let column = DataProcessor::column_at(&table(df), 1).unwrap();
        assert_eq!(column.values[0], 1.0);
        assert!(column.values[1].is_nan());
    }

    #[test]
    fn text_cells_fail() {
        let df = df!("t" => ["zero", "one"]).unwrap();
        assert!(matches!(
            DataProcessor::column_at(&table(df), 0),
            Err(ProcessorError::PolarsError(_))
        ));
    }
}
