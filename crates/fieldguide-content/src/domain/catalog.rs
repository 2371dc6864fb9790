//! The content catalog: an ordered, read-only set of subjects.

use std::collections::HashMap;

use fieldguide_core::error::DomainError;
use sha2::{Digest, Sha256};

use super::subject::Subject;

/// Immutable collection of subjects with exact-key lookup.
///
/// Built once at startup and shared read-only (usually behind an `Arc`)
/// by every session created against it.
#[derive(Debug, Clone)]
pub struct Catalog {
    subjects: Vec<Subject>,
    index: HashMap<String, usize>,
    version_hash: String,
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the list is empty, a key or
    /// display name is blank, or a key appears twice.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, DomainError> {
        if subjects.is_empty() {
            return Err(DomainError::Validation(
                "catalog must contain at least one subject".to_owned(),
            ));
        }

        let mut index = HashMap::with_capacity(subjects.len());
        for (position, subject) in subjects.iter().enumerate() {
            if subject.key.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "subject at position {position} has a blank key"
                )));
            }
            if subject.display_name.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "subject {:?} has a blank display name",
                    subject.key
                )));
            }
            if index.insert(subject.key.clone(), position).is_some() {
                return Err(DomainError::Validation(format!(
                    "duplicate subject key {:?}",
                    subject.key
                )));
            }
        }

        let version_hash = hash_subjects(&subjects)?;

        Ok(Self {
            subjects,
            index,
            version_hash,
        })
    }

    /// Resolves `key` by exact equality.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SubjectNotFound` if no subject has this key.
    pub fn lookup(&self, key: &str) -> Result<&Subject, DomainError> {
        self.get(key)
            .ok_or_else(|| DomainError::SubjectNotFound(key.to_owned()))
    }

    /// Returns the subject for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Subject> {
        self.index.get(key).map(|&position| &self.subjects[position])
    }

    /// Returns `true` if a subject with `key` exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates subjects in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    /// Returns the subjects in catalog order.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Number of subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Always `false` for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Hex SHA-256 over the ordered subjects.
    #[must_use]
    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }
}

fn hash_subjects(subjects: &[Subject]) -> Result<String, DomainError> {
    let canonical = serde_json::to_vec(subjects)
        .map_err(|e| DomainError::Infrastructure(format!("catalog hashing failed: {e}")))?;
    Ok(format!("{:x}", Sha256::digest(&canonical)))
}
