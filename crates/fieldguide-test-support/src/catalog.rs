//! Catalog fixtures.

use fieldguide_content::domain::catalog::Catalog;
use fieldguide_content::domain::subject::Subject;

/// Builds a subject whose summary and detail derive from `display_name`.
fn subject(key: &str, display_name: &str) -> Subject {
    Subject {
        key: key.to_owned(),
        display_name: display_name.to_owned(),
        summary: format!("{display_name} summary"),
        detail: format!("{display_name} detail text"),
        icon: format!("{key}.icon"),
    }
}

/// Two-subject catalog: `nucleus` then `mitochondria`.
///
/// # Panics
///
/// Never in practice; the fixture keys are distinct and non-blank.
#[must_use]
pub fn cell_catalog() -> Catalog {
    Catalog::new(vec![
        subject("nucleus", "Nucleus"),
        subject("mitochondria", "Mitochondria"),
    ])
    .expect("fixture catalog is valid")
}
