//! View state and the reducer that drives it.
//!
//! Every change to what the user sees goes through [`reduce`], which takes the
//! current state and an [`Event`] and returns the next state without doing any
//! I/O. The controller owns the only live copy.

use crate::error::{ClientError, Result};
use crate::models::{AskResponse, SelectedFile, SourceCitation};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Upload,
    Ask,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Upload => write!(f, "upload"),
            RequestKind::Ask => write!(f, "ask"),
        }
    }
}

/// Blocking notification shown once an upload completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    UploadSucceeded,
    UploadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::UploadSucceeded => "File uploaded and indexed!",
            Notice::UploadFailed => "Upload failed.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub file: Option<SelectedFile>,
    pub question: String,
    pub answer: String,
    pub sources: Vec<SourceCitation>,
    pub in_flight: Option<RequestKind>,
    pub notice: Option<Notice>,
    pub ask_error: Option<String>,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Fails with [`ClientError::Busy`] while a request is outstanding.
    pub fn ensure_idle(&self) -> Result<()> {
        match self.in_flight {
            Some(kind) => Err(ClientError::Busy(kind)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    FileSelected(SelectedFile),
    QuestionEdited(String),
    RequestStarted(RequestKind),
    UploadFinished { success: bool },
    AskSucceeded(AskResponse),
    AskFailed(String),
    NoticeDismissed,
}

pub fn reduce(mut state: ViewState, event: Event) -> ViewState {
    match event {
        Event::FileSelected(file) => {
            state.file = Some(file);
        }
        Event::QuestionEdited(question) => {
            state.question = question;
        }
        Event::RequestStarted(kind) => {
            // Overlapping requests are rejected before they get here.
            if state.in_flight.is_some() {
                return state;
            }
            state.in_flight = Some(kind);
            match kind {
                RequestKind::Upload => state.notice = None,
                RequestKind::Ask => state.ask_error = None,
            }
        }
        Event::UploadFinished { success } => {
            state.in_flight = None;
            state.notice = Some(if success {
                Notice::UploadSucceeded
            } else {
                Notice::UploadFailed
            });
        }
        Event::AskSucceeded(response) => {
            state.in_flight = None;
            state.answer = response.answer;
            state.sources = response.sources;
            state.ask_error = None;
        }
        Event::AskFailed(message) => {
            state.in_flight = None;
            state.ask_error = Some(message);
        }
        Event::NoticeDismissed => {
            state.notice = None;
        }
    }

    state
}
