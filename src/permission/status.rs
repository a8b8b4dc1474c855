use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of one permission card. `Unknown` before the first request,
/// `Checking` while a request is in flight, then whatever the platform
/// settled on. A request failure settles as `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Unknown,
    Checking,
    Granted,
    Denied,
    Undetermined,
    Error,
}

impl PermissionStatus {
    /// Parse a settled platform status string. Anything outside the
    /// documented set counts as `Error`.
    pub fn parse_settled(raw: &str) -> Self {
        match raw {
            "granted" => Self::Granted,
            "denied" => Self::Denied,
            "undetermined" => Self::Undetermined,
            _ => Self::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Checking => "checking",
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Undetermined => "undetermined",
            Self::Error => "error",
        }
    }

    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }

    pub fn is_settled(self) -> bool {
        !matches!(self, Self::Unknown | Self::Checking)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::PermissionStatus;

    #[test]
    fn settled_strings_round_trip() {
        for status in [
            PermissionStatus::Granted,
            PermissionStatus::Denied,
            PermissionStatus::Undetermined,
        ] {
            assert_eq!(PermissionStatus::parse_settled(status.as_str()), status);
            assert!(status.is_settled());
        }
    }

    #[test]
    fn unexpected_strings_settle_as_error() {
        assert_eq!(
            PermissionStatus::parse_settled("limited"),
            PermissionStatus::Error
        );
        assert_eq!(PermissionStatus::parse_settled(""), PermissionStatus::Error);
    }

    #[test]
    fn pending_states_are_not_settled() {
        assert!(!PermissionStatus::Unknown.is_settled());
        assert!(!PermissionStatus::Checking.is_settled());
        assert!(!PermissionStatus::Checking.is_granted());
    }
}
