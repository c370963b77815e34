use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors for a catalog run. Bad data inside the CSV is never one of these.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read purchases from {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write catalog to {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn input(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        CatalogError::Input {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Output {
            path: path.into(),
            source,
        }
    }
}
