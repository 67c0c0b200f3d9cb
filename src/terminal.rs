use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::booking_client::BookingApi;
use crate::domain::{option_label, ErrorField, FormField};
use crate::form::{BookingForm, FormView};
use crate::storage::KeyValueStore;
use crate::submission::SubmissionState;

fn prompt(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Full Name *",
        FormField::Email => "Email Address *",
        FormField::Business => "Business/Company",
        FormField::Message => "How can we help you? *",
    }
}

fn form_field(error_field: ErrorField) -> Option<FormField> {
    match error_field {
        ErrorField::Name => Some(FormField::Name),
        ErrorField::Email => Some(FormField::Email),
        ErrorField::Message => Some(FormField::Message),
        ErrorField::General => None,
    }
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N]"))?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        ))
    }
}

/// Change hook that prints the status message whenever it changes.
pub fn status_printer<W: Write + 'static>(mut out: W) -> impl FnMut(&FormView<'_>) {
    let mut last_shown: Option<(SubmissionState, String)> = None;
    move |view: &FormView<'_>| {
        let Some(message) = view.status.message() else {
            return;
        };
        let current = (view.status.state(), message.to_string());
        if last_shown.as_ref() == Some(&current) {
            return;
        }
        if let Err(e) = writeln!(out, "[{}] {}", current.0, current.1) {
            tracing::warn!(error.cause_chain = ?e, "Failed to print the submission status");
        }
        last_shown = Some(current);
    }
}

/// Walks the user through the form until the booking succeeds or they give up.
pub async fn run_form<S, A, R, W>(
    form: &mut BookingForm<S>,
    api: &A,
    terminal: &mut Terminal<R, W>,
) -> anyhow::Result<SubmissionState>
where
    S: KeyValueStore,
    A: BookingApi,
    R: BufRead,
    W: Write,
{
    let options = &form.request().selected_options;
    if !options.is_empty() {
        let out = terminal.output();
        writeln!(out, "Selected AI Models ({})", options.len())?;
        for option in options {
            writeln!(out, "  - {}", option_label(option))?;
        }
    }

    let mut pending: Vec<FormField> = FormField::ALL.to_vec();
    loop {
        for field in pending.drain(..) {
            let value = terminal
                .ask(prompt(field))?
                .context("Input closed before the form was complete.")?;
            form.on_field_change(field, value);
        }

        match form.submit(api).await {
            SubmissionState::Succeeded => return Ok(SubmissionState::Succeeded),
            SubmissionState::Failed => {
                if !terminal.confirm("Submit again?")? {
                    return Ok(SubmissionState::Failed);
                }
            }
            SubmissionState::Idle => {
                let out = terminal.output();
                for (field, error) in form.errors().iter() {
                    writeln!(out, "  {field}: {error}")?;
                }
                pending = form.errors().fields().filter_map(form_field).collect();
            }
            SubmissionState::Submitting => {
                anyhow::bail!("The form is still waiting on an earlier submission.")
            }
        }
    }
}
