use serde::Serialize;

use crate::permission::PermissionKind;
use crate::permission::status::PermissionStatus;

/// Reads a small sample of records for a granted permission. The record
/// lines are display-ready strings; a read failure carries a message
/// surfaced verbatim.
pub trait RecordReader {
    fn read(&mut self, kind: PermissionKind) -> Result<Vec<String>, String>;
}

/// What a read-only demo card shows for one permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoView {
    NeedsPermission,
    Loading,
    Failed(String),
    Empty,
    Records(Vec<String>),
}

impl DemoView {
    /// Derive the card state from the permission status and the settled
    /// read result, if any. `None` means a read is still outstanding.
    pub fn derive(status: PermissionStatus, result: Option<&Result<Vec<String>, String>>) -> Self {
        if !status.is_granted() {
            return Self::NeedsPermission;
        }
        match result {
            None => Self::Loading,
            Some(Err(message)) => Self::Failed(message.clone()),
            Some(Ok(records)) if records.is_empty() => Self::Empty,
            Some(Ok(records)) => Self::Records(records.clone()),
        }
    }
}

/// One demo card: caches the read result while the permission stays
/// granted, drops it the moment the status changes away from granted.
pub struct DemoCard {
    kind: PermissionKind,
    result: Option<Result<Vec<String>, String>>,
}

impl DemoCard {
    pub fn new(kind: PermissionKind) -> Self {
        Self { kind, result: None }
    }

    pub fn kind(&self) -> PermissionKind {
        self.kind
    }

    /// Bring the card in line with the current status, reading through
    /// `reader` on the first sync after a grant.
    pub fn sync(&mut self, status: PermissionStatus, reader: &mut dyn RecordReader) -> DemoView {
        if status.is_granted() {
            if self.result.is_none() {
                self.result = Some(reader.read(self.kind));
            }
        } else {
            self.result = None;
        }
        DemoView::derive(status, self.result.as_ref())
    }
}
