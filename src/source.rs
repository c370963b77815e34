//! Reading the purchases CSV into records

use csv::ReaderBuilder;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::Record;

/// Load every data row of the CSV at `path`, in file order
pub fn read_records(path: &Path) -> Result<Vec<Record>, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| CatalogError::input(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::input(path, e))?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| CatalogError::input(path, e))?;
        // Short rows leave trailing columns absent; extra cells have no header and are dropped
        let record: Record = headers.iter().zip(row.iter()).collect();
        records.push(record);
    }

    Ok(records)
}
