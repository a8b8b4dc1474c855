pub mod engine;
pub mod event;
pub mod field;
pub mod validators;

pub use engine::{RegistrationForm, SubmissionSink, SubmittedRecord};
pub use event::FormEvent;
pub use field::{FieldId, TextField};
pub use validators::{ValidationError, Validator};
