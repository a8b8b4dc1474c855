use indexmap::IndexMap;

use crate::permission::PermissionKind;
use crate::permission::status::PermissionStatus;

/// The platform side of a permission request. Implementations settle
/// synchronously from the dashboard's point of view; an async embedder
/// drives `begin_request`/`settle` itself.
pub trait PermissionSource {
    fn request(&mut self, kind: PermissionKind) -> Result<PermissionStatus, String>;
}

/// Ordered kind -> status map backing the permission card list.
pub struct Dashboard {
    statuses: IndexMap<PermissionKind, PermissionStatus>,
}

impl Dashboard {
    pub fn new() -> Self {
        let mut statuses = IndexMap::new();
        for kind in PermissionKind::ALL {
            statuses.insert(kind, PermissionStatus::Unknown);
        }
        Self { statuses }
    }

    pub fn status(&self, kind: PermissionKind) -> PermissionStatus {
        self.statuses
            .get(&kind)
            .copied()
            .unwrap_or(PermissionStatus::Unknown)
    }

    pub fn statuses(&self) -> impl Iterator<Item = (PermissionKind, PermissionStatus)> + '_ {
        self.statuses.iter().map(|(kind, status)| (*kind, *status))
    }

    /// Mark a request as in flight.
    pub fn begin_request(&mut self, kind: PermissionKind) {
        self.statuses.insert(kind, PermissionStatus::Checking);
    }

    /// Record the outcome of a request. A source failure settles as
    /// `Error`; the message itself is not retained here.
    pub fn settle(
        &mut self,
        kind: PermissionKind,
        result: Result<PermissionStatus, String>,
    ) -> PermissionStatus {
        let status = result.unwrap_or(PermissionStatus::Error);
        self.statuses.insert(kind, status);
        status
    }

    /// One-shot request against a synchronous source.
    pub fn request(
        &mut self,
        kind: PermissionKind,
        source: &mut dyn PermissionSource,
    ) -> PermissionStatus {
        self.begin_request(kind);
        let result = source.request(kind);
        self.settle(kind, result)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
