//! Data module - CSV loading and column extraction

mod loader;
mod processor;

pub use loader::{DataLoader, LoaderError, Table};
pub use processor::{DataProcessor, NumericColumn, ProcessorError, SeriesSet, SERIES_COUNT};
