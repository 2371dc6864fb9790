//! Application layer for the Content Catalog context.

pub mod loader;
