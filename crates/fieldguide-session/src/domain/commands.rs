//! Commands for the Hotspot Session context.

use fieldguide_core::command::Command;
use uuid::Uuid;

use super::scene::NormalizedPosition;

/// Command to present the subject behind a hotspot key.
#[derive(Debug, Clone)]
pub struct ActivateHotspot {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The tapped hotspot's key.
    pub key: String,
}

impl Command for ActivateHotspot {
    fn command_type(&self) -> &'static str {
        "session.activate_hotspot"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command carrying a raw tap on the scene surface.
#[derive(Debug, Clone)]
pub struct TapScene {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Where the tap landed.
    pub position: NormalizedPosition,
}

impl Command for TapScene {
    fn command_type(&self) -> &'static str {
        "session.tap_scene"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to close the presentation surface.
#[derive(Debug, Clone)]
pub struct DismissPresentation {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for DismissPresentation {
    fn command_type(&self) -> &'static str {
        "session.dismiss_presentation"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to narrate the current subject.
#[derive(Debug, Clone)]
pub struct NarrateSubject {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for NarrateSubject {
    fn command_type(&self) -> &'static str {
        "session.narrate_subject"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
