//! Scenes and the hotspots overlaid on them.

use fieldguide_content::domain::catalog::Catalog;
use fieldguide_core::error::DomainError;
use serde::Serialize;

/// A point relative to the scene surface's bounding box.
///
/// Both axes lie in `[0.0, 1.0]`, with `(0, 0)` at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPosition {
    x: f64,
    y: f64,
}

impl NormalizedPosition {
    /// Creates a position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either axis is non-finite or
    /// outside `[0.0, 1.0]`.
    pub fn new(x: f64, y: f64) -> Result<Self, DomainError> {
        for (axis, value) in [("x", x), ("y", y)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DomainError::Validation(format!(
                    "{axis} coordinate {value} outside [0.0, 1.0]"
                )));
            }
        }
        Ok(Self { x, y })
    }

    /// Horizontal axis.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical axis.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance in normalized space.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Projects onto a surface of `width` x `height` points.
    #[must_use]
    pub fn project(&self, width: f64, height: f64) -> (f64, f64) {
        (self.x * width, self.y * height)
    }
}

/// A tappable marker referencing a catalog subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    /// Subject key.
    pub key: String,
    /// Where the marker sits on the surface.
    pub position: NormalizedPosition,
}

/// The hotspots configured for one mounted view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    hotspots: Vec<Hotspot>,
}

impl Scene {
    /// Maximum normalized distance at which a tap still hits a hotspot.
    pub const DEFAULT_HIT_TOLERANCE: f64 = 0.08;

    /// Builds a scene whose every hotspot resolves in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SubjectNotFound` for a hotspot whose key is not
    /// in the catalog and `DomainError::Validation` for a repeated key.
    pub fn new(hotspots: Vec<Hotspot>, catalog: &Catalog) -> Result<Self, DomainError> {
        for (position, hotspot) in hotspots.iter().enumerate() {
            catalog.lookup(&hotspot.key)?;
            if hotspots[..position].iter().any(|h| h.key == hotspot.key) {
                return Err(DomainError::Validation(format!(
                    "hotspot key {:?} appears more than once",
                    hotspot.key
                )));
            }
        }
        Ok(Self { hotspots })
    }

    /// Hotspots in declaration order.
    #[must_use]
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Returns the hotspot for `key`, if the scene has one.
    #[must_use]
    pub fn hotspot(&self, key: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.key == key)
    }

    /// Returns the hotspot nearest to `point` within `tolerance`.
    ///
    /// On equal distance the earlier-declared hotspot wins.
    #[must_use]
    pub fn hotspot_at(&self, point: &NormalizedPosition, tolerance: f64) -> Option<&Hotspot> {
        self.hotspots
            .iter()
            .map(|h| (h, h.position.distance_to(point)))
            .filter(|(_, distance)| *distance <= tolerance)
            .fold(None, |best: Option<(&Hotspot, f64)>, candidate| match best {
                Some((_, best_distance)) if best_distance <= candidate.1 => best,
                _ => Some(candidate),
            })
            .map(|(hotspot, _)| hotspot)
    }

    /// Number of hotspots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    /// `true` for a placeholder view with no hotspots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }
}
