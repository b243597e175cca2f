use super::event::{SubmitJob, SubmitOutcome};
use datasieve_core::validate;
use datasieve_types::{Payload, ResponseField, Selection, SieveResponse};

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Editor,
    Selector,
}

/// Form state. Everything lives for one session; nothing is persisted.
pub(crate) struct FormApp {
    /// Endpoint label for the title bar
    pub endpoint: String,

    /// Raw editor text, revalidated after every edit
    pub input: String,
    pub focus: Focus,

    /// Parse result of the current input; `None` means invalid or empty
    pub payload: Option<Payload>,
    /// Validator message for the current input, if it is invalid
    pub validation_message: Option<String>,

    /// Fields chosen for display; starts empty like the original form
    pub selection: Selection,
    pub selector_cursor: usize,

    /// Last successful response; failures leave it untouched
    pub response: Option<SieveResponse>,
    /// Message from the last failed attempt, cleared when a new one starts
    pub error: Option<String>,

    pub in_flight: bool,
    /// Monotonic submission counter used to drop stale completions
    pub generation: u64,
    pub submitted_at: Option<chrono::DateTime<chrono::Local>>,

    pub should_quit: bool,
}

impl FormApp {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            input: String::new(),
            focus: Focus::Editor,
            payload: None,
            validation_message: None,
            selection: Selection::new(),
            selector_cursor: 0,
            response: None,
            error: None,
            in_flight: false,
            generation: 0,
            submitted_at: None,
            should_quit: false,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.revalidate();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.revalidate();
    }

    /// Rerun the validator against the current input. An all-whitespace
    /// editor is treated as "nothing entered yet" rather than invalid, so
    /// the form does not nag before the user types.
    fn revalidate(&mut self) {
        if self.input.trim().is_empty() {
            self.payload = None;
            self.validation_message = None;
            return;
        }

        match validate(&self.input) {
            Ok(payload) => {
                self.payload = Some(payload);
                self.validation_message = None;
            }
            Err(err) => {
                self.payload = None;
                self.validation_message = Some(err.to_string());
            }
        }
    }

    /// Start a submission if the validation gate allows it.
    ///
    /// Returns the job to hand to the worker; `None` means the gate closed
    /// and the message has been recorded instead. The previous error is
    /// cleared either way, so every attempt starts clean.
    pub fn begin_submit(&mut self) -> Option<SubmitJob> {
        self.error = None;

        match &self.payload {
            Some(payload) => {
                self.generation += 1;
                self.in_flight = true;
                Some(SubmitJob {
                    generation: self.generation,
                    payload: payload.clone(),
                })
            }
            None => {
                self.error = Some("Please enter a valid JSON before submitting.".to_string());
                None
            }
        }
    }

    /// Fold a worker outcome into the form.
    ///
    /// Outcomes for anything but the latest generation are dropped: a newer
    /// submission has already superseded them and must not be overwritten.
    pub fn on_outcome(&mut self, outcome: SubmitOutcome) {
        if outcome.generation != self.generation {
            return;
        }

        self.in_flight = false;
        match outcome.result {
            Ok(response) => {
                self.response = Some(response);
                self.error = None;
                self.submitted_at = Some(chrono::Local::now());
            }
            Err(err) => {
                // The previous response stays on screen
                self.error = Some(submit_error_message(&err));
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Editor => Focus::Selector,
            Focus::Selector => Focus::Editor,
        };
    }

    pub fn selector_up(&mut self) {
        if self.selector_cursor > 0 {
            self.selector_cursor -= 1;
        }
    }

    pub fn selector_down(&mut self) {
        if self.selector_cursor + 1 < ResponseField::DISPLAY_ORDER.len() {
            self.selector_cursor += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        let field = ResponseField::DISPLAY_ORDER[self.selector_cursor];
        self.selection.toggle(field);
    }
}

/// The single user-visible string for a failed submission.
fn submit_error_message(err: &datasieve_client::Error) -> String {
    match err {
        datasieve_client::Error::Http(inner) => format!("Error: {}", inner),
        datasieve_client::Error::Endpoint(inner) => format!("Error: {}", inner),
        datasieve_client::Error::Processing => err.to_string(),
    }
}
