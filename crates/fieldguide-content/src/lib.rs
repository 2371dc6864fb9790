//! Fieldguide — Content Catalog bounded context.
//!
//! Responsible for the immutable set of subject records, key-based
//! resolution, and loading/versioning of catalog sources.

pub mod application;
pub mod domain;
