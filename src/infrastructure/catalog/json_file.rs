use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{Catalog, DomainError};

/// Loads the expert catalog from a JSON file holding an array of experts
#[derive(Debug, Clone)]
pub struct JsonCatalogLoader {
    path: PathBuf,
}

impl JsonCatalogLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn load(&self) -> Result<Catalog, DomainError> {
        let data = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::catalog(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let catalog = Catalog::from_json(&data)?;

        info!(
            path = %self.path.display(),
            experts = catalog.len(),
            "Loaded expert catalog"
        );

        Ok(catalog)
    }
}
