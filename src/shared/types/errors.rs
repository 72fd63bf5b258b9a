use std::path::PathBuf;

use thiserror::Error;

/// Failure reading the catalog data file.
///
/// Never reaches HTTP clients: the loader collapses it into an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
