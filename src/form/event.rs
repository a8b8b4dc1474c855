use crate::form::engine::SubmittedRecord;
use crate::form::field::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ValueChanged {
        id: FieldId,
        value: String,
    },
    /// The rendering layer should move focus to this field.
    FocusRequested {
        id: FieldId,
    },
    SubmitBlocked,
    Submitted {
        record: SubmittedRecord,
    },
}
