//! Catalog loading from YAML sources.
//!
//! A catalog document has a single top-level `subjects` list; each entry
//! carries `key`, `display_name`, `summary`, `detail` and `icon`.

use std::path::Path;

use fieldguide_core::error::DomainError;
use serde::Deserialize;
use tracing::info;

use crate::domain::catalog::Catalog;
use crate::domain::subject::Subject;

const BUILTIN_CATALOG: &str = include_str!("../../data/cell_biology.yaml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    subjects: Vec<Subject>,
}

/// Parses and validates a catalog from YAML text.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the YAML cannot be parsed and
/// `DomainError::Validation` if the subjects fail catalog validation.
pub fn load_catalog_from_str(source: &str) -> Result<Catalog, DomainError> {
    let document: CatalogDocument = serde_yaml::from_str(source)
        .map_err(|e| DomainError::Infrastructure(format!("catalog parse failed: {e}")))?;
    Catalog::new(document.subjects)
}

/// Reads, parses and validates a catalog file.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the file cannot be read or
/// parsed and `DomainError::Validation` if validation fails.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog, DomainError> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Infrastructure(format!("cannot read catalog {}: {e}", path.display()))
    })?;
    let catalog = load_catalog_from_str(&source)?;
    info!(
        path = %path.display(),
        subjects = catalog.len(),
        version_hash = catalog.version_hash(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Returns the embedded cell biology catalog.
///
/// # Errors
///
/// Only fails if the embedded document is broken, which the tests rule out.
pub fn builtin_catalog() -> Result<Catalog, DomainError> {
    load_catalog_from_str(BUILTIN_CATALOG)
}
