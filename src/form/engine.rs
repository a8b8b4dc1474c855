use serde::{Deserialize, Serialize};

use crate::form::event::FormEvent;
use crate::form::field::{FieldId, TextField};
use crate::form::validators;
use crate::state::focus::FocusState;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";

pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const SUBMIT_BLOCKED: &str = "Please fix the fields highlighted in red before submitting.";

/// The trimmed, validated payload handed to the submission sink. The form
/// keeps no copy of it after handoff; the embedding layer owns any
/// "last submitted" display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    pub name: String,
    pub email: String,
}

pub type SubmissionSink = Box<dyn FnMut(SubmittedRecord) + Send>;

/// Registration form: two text fields, per-field inline errors, an
/// aggregate submit error, and a declarative focus request. The same
/// validator chains run on every keystroke and again on submit, so the
/// messages are identical regardless of trigger.
pub struct RegistrationForm {
    title: String,
    fields: Vec<TextField>,
    submit_error: Option<String>,
    focus: FocusState,
    sink: SubmissionSink,
}

impl RegistrationForm {
    pub fn new(title: impl Into<String>, sink: SubmissionSink) -> Self {
        let fields = vec![
            TextField::new(NAME_FIELD, "Name")
                .with_validator(validators::required(NAME_REQUIRED))
                .with_validator(validators::min_length(2, NAME_TOO_SHORT)),
            TextField::new(EMAIL_FIELD, "Email")
                .with_validator(validators::required(EMAIL_REQUIRED))
                .with_validator(validators::email(EMAIL_INVALID)),
        ];
        let focus = FocusState::from_ids(
            fields.iter().map(|field| field.id().to_string()).collect(),
        );

        Self {
            title: title.into(),
            fields,
            submit_error: None,
            focus,
            sink,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.field(id).map(|field| field.value())
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.field(id).and_then(|field| field.error())
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// The field the rendering layer should focus, if any.
    pub fn requested_focus(&self) -> Option<&str> {
        self.focus.current_id()
    }

    pub fn update_name(&mut self, text: impl Into<String>) -> Vec<FormEvent> {
        self.update_field(NAME_FIELD, text.into())
    }

    pub fn update_email(&mut self, text: impl Into<String>) -> Vec<FormEvent> {
        self.update_field(EMAIL_FIELD, text.into())
    }

    /// Revalidate both fields, then either block (storing the aggregate
    /// error and requesting focus on the first invalid field) or hand the
    /// trimmed record to the sink and reset.
    pub fn submit(&mut self) -> Vec<FormEvent> {
        let mut first_invalid: Option<FieldId> = None;
        for field in &mut self.fields {
            if !field.revalidate() && first_invalid.is_none() {
                first_invalid = Some(field.id().to_string());
            }
        }

        if let Some(id) = first_invalid {
            self.submit_error = Some(SUBMIT_BLOCKED.to_string());
            self.focus.set_focus_by_id(&id);
            return vec![FormEvent::FocusRequested { id }, FormEvent::SubmitBlocked];
        }

        self.submit_error = None;
        self.focus.clear();

        let record = SubmittedRecord {
            name: self.trimmed(NAME_FIELD),
            email: self.trimmed(EMAIL_FIELD),
        };
        (self.sink)(record.clone());

        for field in &mut self.fields {
            field.reset();
        }

        vec![FormEvent::Submitted { record }]
    }

    fn update_field(&mut self, id: &str, text: String) -> Vec<FormEvent> {
        let Some(field) = self.field_mut(id) else {
            return vec![];
        };

        field.set_value(text);
        let value = field.value().to_string();

        if self.fields.iter().all(|field| field.error().is_none()) {
            self.submit_error = None;
        }

        vec![FormEvent::ValueChanged {
            id: id.to_string(),
            value,
        }]
    }

    fn field(&self, id: &str) -> Option<&TextField> {
        self.fields.iter().find(|field| field.id() == id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut TextField> {
        self.fields.iter_mut().find(|field| field.id() == id)
    }

    fn trimmed(&self, id: &str) -> String {
        self.field(id)
            .map(|field| field.trimmed().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{
        EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED, RegistrationForm, SUBMIT_BLOCKED,
        SubmittedRecord,
    };
    use crate::form::event::FormEvent;

    fn form_with_sink() -> (RegistrationForm, Arc<Mutex<Vec<SubmittedRecord>>>) {
        let submitted = Arc::new(Mutex::new(Vec::new()));
        let sink_submitted = Arc::clone(&submitted);
        let form = RegistrationForm::new(
            "Simple registration form",
            Box::new(move |record| sink_submitted.lock().unwrap().push(record)),
        );
        (form, submitted)
    }

    #[test]
    fn empty_form_submit_blocks_and_focuses_name() {
        let (mut form, submitted) = form_with_sink();

        let events = form.submit();

        assert_eq!(form.error("name"), Some(NAME_REQUIRED));
        assert_eq!(form.error("email"), Some(EMAIL_REQUIRED));
        assert_eq!(form.submit_error(), Some(SUBMIT_BLOCKED));
        assert_eq!(form.requested_focus(), Some("name"));
        assert!(submitted.lock().unwrap().is_empty());
        assert_eq!(
            events,
            vec![
                FormEvent::FocusRequested {
                    id: "name".to_string()
                },
                FormEvent::SubmitBlocked,
            ]
        );
    }

    #[test]
    fn invalid_email_alone_focuses_email() {
        let (mut form, submitted) = form_with_sink();
        form.update_name("Al");
        form.update_email("bad");

        form.submit();

        assert_eq!(form.error("name"), None);
        assert_eq!(form.error("email"), Some(EMAIL_INVALID));
        assert_eq!(form.submit_error(), Some(SUBMIT_BLOCKED));
        assert_eq!(form.requested_focus(), Some("email"));
        assert!(submitted.lock().unwrap().is_empty());
        // field values are retained so the user can correct them
        assert_eq!(form.value("name"), Some("Al"));
        assert_eq!(form.value("email"), Some("bad"));
    }

    #[test]
    fn repeated_submit_with_unchanged_input_is_idempotent() {
        let (mut form, submitted) = form_with_sink();
        form.update_email("bad");

        let first = form.submit();
        let second = form.submit();

        assert_eq!(first, second);
        assert_eq!(form.error("name"), Some(NAME_REQUIRED));
        assert_eq!(form.error("email"), Some(EMAIL_INVALID));
        assert!(submitted.lock().unwrap().is_empty());
    }

    #[test]
    fn valid_submit_trims_hands_off_and_resets() {
        let (mut form, submitted) = form_with_sink();
        form.update_name("  Ada Lovelace ");
        form.update_email(" ada@example.com ");

        let events = form.submit();

        let expected = SubmittedRecord {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(submitted.lock().unwrap().as_slice(), &[expected.clone()]);
        assert_eq!(events, vec![FormEvent::Submitted { record: expected }]);

        assert_eq!(form.value("name"), Some(""));
        assert_eq!(form.value("email"), Some(""));
        assert_eq!(form.error("name"), None);
        assert_eq!(form.error("email"), None);
        assert_eq!(form.submit_error(), None);
        assert_eq!(form.requested_focus(), None);
    }

    #[test]
    fn form_keeps_no_submission_history() {
        let (mut form, submitted) = form_with_sink();
        form.update_name("Ada");
        form.update_email("ada@example.com");
        form.submit();

        // parent-owned record survives; the form's own state is blank
        assert_eq!(submitted.lock().unwrap().len(), 1);
        assert_eq!(form.value("name"), Some(""));
        assert_eq!(form.value("email"), Some(""));

        // a second submit from the blank form blocks instead of re-sending
        form.submit();
        assert_eq!(submitted.lock().unwrap().len(), 1);
    }

    #[test]
    fn keystroke_validation_matches_submit_validation() {
        let (mut form, _) = form_with_sink();

        form.update_name("A");
        let inline = form.error("name").map(str::to_string);
        form.submit();
        assert_eq!(form.error("name").map(str::to_string), inline);
    }

    #[test]
    fn submit_error_clears_once_both_fields_validate() {
        let (mut form, _) = form_with_sink();
        form.submit();
        assert_eq!(form.submit_error(), Some(SUBMIT_BLOCKED));

        form.update_name("Ada");
        assert_eq!(form.submit_error(), Some(SUBMIT_BLOCKED));

        form.update_email("ada@example.com");
        assert_eq!(form.submit_error(), None);
    }

    #[test]
    fn title_passes_through() {
        let (form, _) = form_with_sink();
        assert_eq!(form.title(), "Simple registration form");
    }

    #[test]
    fn whitespace_only_name_is_required_not_too_short() {
        let (mut form, _) = form_with_sink();
        form.update_name("   ");
        assert_eq!(form.error("name"), Some(NAME_REQUIRED));
    }
}
