use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use formgate::engine::{RegistrationForm, SubmittedRecord};
use formgate::event::FormEvent;
use formgate::dashboard::{Dashboard, PermissionSource};
use formgate::demo::{DemoCard, DemoView, RecordReader};
use formgate::permission::PermissionKind;
use formgate::status::PermissionStatus;

/// Stand-in for the platform permission API: camera and contacts grant,
/// location denies, calendar fails outright.
struct ScriptedSource;

impl PermissionSource for ScriptedSource {
    fn request(&mut self, kind: PermissionKind) -> Result<PermissionStatus, String> {
        match kind {
            PermissionKind::Camera | PermissionKind::Contacts => Ok(PermissionStatus::Granted),
            PermissionKind::Location => Ok(PermissionStatus::Denied),
            PermissionKind::Calendar => Err("Calendar backend unavailable".to_string()),
        }
    }
}

struct SampleReader;

impl RecordReader for SampleReader {
    fn read(&mut self, kind: PermissionKind) -> Result<Vec<String>, String> {
        match kind {
            PermissionKind::Camera => Ok(vec!["Back camera ready".to_string()]),
            PermissionKind::Location => Ok(vec!["lat 51.47770, lon -0.00148".to_string()]),
            PermissionKind::Contacts => Ok(vec![
                "Ada Lovelace".to_string(),
                "Grace Hopper".to_string(),
                "Alan Turing".to_string(),
            ]),
            PermissionKind::Calendar => Ok(vec![]),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // Parent-owned "last submitted" display; the form itself keeps no
    // submission history.
    let last_submitted: Arc<Mutex<Option<SubmittedRecord>>> = Arc::new(Mutex::new(None));
    let sink_slot = Arc::clone(&last_submitted);
    let mut form = RegistrationForm::new(
        "Simple registration form",
        Box::new(move |record| {
            *sink_slot.lock().unwrap() = Some(record);
        }),
    );

    let mut dashboard = Dashboard::new();
    let mut source = ScriptedSource;
    let mut reader = SampleReader;
    let mut cards: Vec<DemoCard> = PermissionKind::ALL.into_iter().map(DemoCard::new).collect();

    writeln!(stdout, "{}", form.title())?;
    writeln!(
        stdout,
        "commands: name <text> | email <text> | submit | request <kind> | status | demos | last | quit"
    )?;

    for line in stdin.lock().lines() {
        let line = line?;
        let (command, rest) = match line.trim_end().split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line.trim_end(), ""),
        };

        match command {
            "name" => report_form(&mut stdout, &form.update_name(rest), &form)?,
            "email" => report_form(&mut stdout, &form.update_email(rest), &form)?,
            "submit" => report_form(&mut stdout, &form.submit(), &form)?,
            "request" => match PermissionKind::parse(rest.trim()) {
                Some(kind) => {
                    let status = dashboard.request(kind, &mut source);
                    writeln!(stdout, "{}: {}", kind.label(), status)?;
                }
                None => writeln!(stdout, "unknown permission: {}", rest.trim())?,
            },
            "status" => {
                for (kind, status) in dashboard.statuses() {
                    writeln!(stdout, "{:<22} {}", kind.label(), status)?;
                }
            }
            "demos" => {
                for card in &mut cards {
                    let view = card.sync(dashboard.status(card.kind()), &mut reader);
                    print_demo(&mut stdout, card.kind(), &view)?;
                }
            }
            "last" => match last_submitted.lock().unwrap().as_ref() {
                Some(record) => writeln!(
                    stdout,
                    "last submitted: {}",
                    serde_json::to_string(record).map_err(io::Error::other)?
                )?,
                None => writeln!(stdout, "nothing submitted yet")?,
            },
            "quit" | "exit" => break,
            "" => {}
            other => writeln!(stdout, "unknown command: {}", other)?,
        }
        stdout.flush()?;
    }

    Ok(())
}

fn report_form(out: &mut impl Write, events: &[FormEvent], form: &RegistrationForm) -> io::Result<()> {
    for event in events {
        match event {
            FormEvent::Submitted { record } => writeln!(
                out,
                "submitted: {}",
                serde_json::to_string(record).map_err(io::Error::other)?
            )?,
            FormEvent::FocusRequested { id } => writeln!(out, "focus -> {}", id)?,
            FormEvent::SubmitBlocked | FormEvent::ValueChanged { .. } => {}
        }
    }

    for field in form.fields() {
        if let Some(error) = field.error() {
            writeln!(out, "{}: {}", field.label(), error)?;
        }
    }
    if let Some(error) = form.submit_error() {
        writeln!(out, "{}", error)?;
    }
    Ok(())
}

fn print_demo(out: &mut impl Write, kind: PermissionKind, view: &DemoView) -> io::Result<()> {
    match view {
        DemoView::NeedsPermission => writeln!(
            out,
            "{}: grant the permission above to see this demo",
            kind.label()
        ),
        DemoView::Loading => writeln!(out, "{}: loading", kind.label()),
        DemoView::Failed(message) => writeln!(out, "{}: {}", kind.label(), message),
        DemoView::Empty => writeln!(out, "{}: no records found", kind.label()),
        DemoView::Records(records) => {
            writeln!(out, "{}:", kind.label())?;
            for record in records {
                writeln!(out, "  {}", record)?;
            }
            Ok(())
        }
    }
}
