//! Subject records.

use serde::{Deserialize, Serialize};

/// One educational topic in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable identifier, unique across the catalog.
    pub key: String,
    /// Short label.
    pub display_name: String,
    /// One-line description.
    pub summary: String,
    /// Longer narrative text, narrated verbatim.
    pub detail: String,
    /// Symbolic glyph name. Carries no behavior.
    pub icon: String,
}
