//! hw-data: scenario dataset schema and loading.

pub mod load;
pub mod schema;

pub use load::{Dataset, from_reader, load_csv};
pub use schema::{Metric, RawRecord, ScenarioKey, ScenarioMetrics, ScenarioRow};

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Row {row}: {source}")]
    Decode {
        row: usize,
        source: hw_core::CoreError,
    },

    #[error("Duplicate scenario combination: {key:?}")]
    DuplicateScenario { key: ScenarioKey },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
