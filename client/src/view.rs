use crate::state::ViewState;
use std::fmt::Write;

pub const TITLE: &str = "Gen AI RAG App";

/// Renders the whole screen for `state`. Output depends on nothing else.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out);

    match &state.file {
        Some(file) => {
            let _ = writeln!(out, "File: {} ({} bytes)", file.name, file.len());
        }
        None => {
            let _ = writeln!(out, "File: (none selected)");
        }
    }
    let _ = writeln!(out, "  [upload] Upload + Index");

    if state.question.is_empty() {
        let _ = writeln!(out, "Question: Ask a question...");
    } else {
        let _ = writeln!(out, "Question: {}", state.question);
    }
    let _ = writeln!(out, "  [ask] Ask");

    if state.is_loading() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Loading...");
    }

    if let Some(error) = &state.ask_error {
        let _ = writeln!(out);
        let _ = writeln!(out, "Error: {}", error);
    }

    if !state.answer.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Answer: {}", state.answer);

        if !state.sources.is_empty() {
            let _ = writeln!(out, "Sources:");
            for (i, source) in state.sources.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, source);
            }
        }
    }

    out
}
