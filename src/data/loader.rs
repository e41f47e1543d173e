//! CSV Data Loader Module
//! Reads the input file into a read-only table using Polars.

use log::info;
use polars::prelude::*;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot open {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse CSV")]
    Csv(#[from] PolarsError),
}

/// In-memory CSV contents. The first file row is the header.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
    path: PathBuf,
}

impl Table {
    pub fn new(df: DataFrame, path: impl Into<PathBuf>) -> Self {
        Self {
            df,
            path: path.into(),
        }
    }

    /// Header names in column order.
    pub fn headers(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads comma-delimited files with a header row.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file. Malformed rows are not skipped.
    ///
    /// Column types are inferred from every row. Repeated header names are
    /// kept apart by the reader: `t,y,y,y` yields `y`, `y_duplicated_0`,
    /// `y_duplicated_1`.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Table, LoaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoaderError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(file)
            .finish()?;

        info!(
            "Loaded {}: {} rows, {} columns",
            path.display(),
            df.height(),
            df.width()
        );

        Ok(Table::new(df, path))
    }
}
