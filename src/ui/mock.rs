//! Recording UI for tests.
//!
//! Every call is appended to one ordered [`UiEvent`] log, so tests can
//! assert both what was shown and in which order. Spinners write their
//! final status into the same log.
//!
//! # Example
//!
//! ```
//! use nodeprep::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("app_root", "/srv/comfy");
//!
//! let answer = ui.prompt(&Prompt::new("app_root", "Where?")).unwrap();
//! assert_eq!(answer, "/srv/comfy");
//! assert_eq!(ui.prompts_shown(), ["app_root"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;
use crate::plugins::InstallReport;

use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// How a spinner ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
}

/// One recorded UI call.
#[derive(Debug, Clone)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    /// A prompt was asked; holds the prompt key.
    Prompt(String),
    SpinnerStarted(String),
    SpinnerFinished(SpinnerStatus, String),
    Output { title: String, text: String },
    Summary(InstallReport),
}

type EventLog = Rc<RefCell<Vec<UiEvent>>>;

/// UI that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    responses: HashMap<String, String>,
    log: EventLog,
}

impl MockUI {
    /// Create a recorder in Normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder in the given mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Script the answer for prompt `key`.
    ///
    /// Unscripted prompts get an empty answer.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.responses.insert(key.to_string(), response.to_string());
    }

    /// Everything recorded so far, oldest first.
    pub fn events(&self) -> Vec<UiEvent> {
        self.log.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Message(m) => Some(m),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Success(m) => Some(m),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Warning(m) => Some(m),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Error(m) => Some(m),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Header(m) => Some(m),
            _ => None,
        })
    }

    /// Keys of the prompts asked, in order.
    pub fn prompts_shown(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Prompt(key) => Some(key),
            _ => None,
        })
    }

    /// Messages of the spinners started, in order.
    pub fn spinners(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::SpinnerStarted(m) => Some(m),
            _ => None,
        })
    }

    /// Final status of each finished spinner, in order.
    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UiEvent::SpinnerFinished(status, msg) => Some((*status, msg.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn summaries(&self) -> Vec<InstallReport> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                UiEvent::Summary(report) => Some(report.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.successes().iter().any(|m| m.contains(needle))
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|m| m.contains(needle))
    }

    /// Whether an output block titled like `title` contains `needle`.
    pub fn has_output(&self, title: &str, needle: &str) -> bool {
        self.log.borrow().iter().any(|e| match e {
            UiEvent::Output { title: t, text } => t.contains(title) && text.contains(needle),
            _ => false,
        })
    }

    fn texts(&self, pick: impl Fn(&UiEvent) -> Option<&String>) -> Vec<String> {
        self.log.borrow().iter().filter_map(pick).cloned().collect()
    }

    fn record(&self, event: UiEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.record(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(UiEvent::Error(msg.to_string()));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.record(UiEvent::Prompt(prompt.key.clone()));
        let answer = self
            .responses
            .get(&prompt.key)
            .cloned()
            .unwrap_or_default();
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(UiEvent::SpinnerStarted(message.to_string()));
        Box::new(MockSpinner {
            log: Rc::clone(&self.log),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.record(UiEvent::Header(title.to_string()));
    }

    fn show_output_block(&mut self, title: &str, output: &str) {
        self.record(UiEvent::Output {
            title: title.to_string(),
            text: output.to_string(),
        });
    }

    fn show_install_summary(&mut self, report: &InstallReport) {
        self.record(UiEvent::Summary(report.clone()));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner handed out by [`MockUI`]; reports back into its log.
#[derive(Debug)]
pub struct MockSpinner {
    log: EventLog,
}

impl MockSpinner {
    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.log
            .borrow_mut()
            .push(UiEvent::SpinnerFinished(status, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, msg);
    }
}
