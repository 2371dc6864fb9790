//! Domain layer for the Content Catalog context.

pub mod catalog;
pub mod subject;
