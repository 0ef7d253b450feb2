//! Dataset loading: CSV → decode → augment → validate.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::schema::{ScenarioKey, ScenarioRow};
use crate::{DataError, DataResult};

/// Immutable, in-memory table of precomputed simulation results. Built once
/// at load time and shared read-only for the rest of the session.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<ScenarioRow>,
}

impl Dataset {
    /// Build a dataset from decoded rows. Gas-heater rows are duplicated with
    /// the solar flag forced on (solar PV does not change a gas heater's
    /// simulated behaviour but must remain selectable for PV households),
    /// then every scenario key must be unique.
    pub fn new(rows: Vec<ScenarioRow>) -> DataResult<Self> {
        let rows = augment_gas_with_solar(rows);

        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.key) {
                return Err(DataError::DuplicateScenario { key: row.key });
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ScenarioRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn augment_gas_with_solar(mut rows: Vec<ScenarioRow>) -> Vec<ScenarioRow> {
    let existing: HashSet<ScenarioKey> = rows.iter().map(|r| r.key).collect();

    let mut extra = Vec::new();
    for row in &rows {
        if row.key.heater.is_gas() && !row.key.has_solar {
            let mut twin = *row;
            twin.key.has_solar = true;
            if !existing.contains(&twin.key) {
                extra.push(twin);
            }
        }
    }

    rows.extend(extra);
    rows
}

/// Load a dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> DataResult<Dataset> {
    let file = std::fs::File::open(path)?;
    let dataset = from_reader(file)?;
    tracing::info!(rows = dataset.len(), path = %path.display(), "loaded scenario dataset");
    Ok(dataset)
}

/// Load a dataset from any CSV source.
pub fn from_reader<R: Read>(reader: R) -> DataResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in csv_reader.deserialize::<crate::schema::RawRecord>().enumerate() {
        let record = record?;
        // Header is line 1, first record line 2.
        let row = record
            .decode()
            .map_err(|source| DataError::Decode { row: index + 2, source })?;
        rows.push(row);
    }

    Dataset::new(rows)
}
