pub mod dashboard;
pub mod demo;
pub mod status;

pub use dashboard::{Dashboard, PermissionSource};
pub use demo::{DemoCard, DemoView, RecordReader};
pub use status::PermissionStatus;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Camera,
    Location,
    Contacts,
    Calendar,
}

impl PermissionKind {
    /// Display order of the permission cards.
    pub const ALL: [PermissionKind; 4] = [
        Self::Camera,
        Self::Location,
        Self::Contacts,
        Self::Calendar,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Location => "location",
            Self::Contacts => "contacts",
            Self::Calendar => "calendar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Camera => "Camera",
            Self::Location => "Location (Foreground)",
            Self::Contacts => "Contacts",
            Self::Calendar => "Calendar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Camera => "Needed to take photos or scan barcodes.",
            Self::Location => "Used for location-aware features like nearby stores.",
            Self::Contacts => "Lets the app read your contacts to help with sharing or invites.",
            Self::Calendar => "Allows reading your calendars for scheduling and reminders.",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == raw)
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
