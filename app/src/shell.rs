use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  file <path>        select the file to upload
  question <text>    set the question (alias: q)
  upload             upload and index the selected file
  ask [text]         ask the current question, or <text> if given
  show               redraw the screen
  help               show this help
  quit               exit (alias: exit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectFile(PathBuf),
    SetQuestion(String),
    Upload,
    Ask(Option<String>),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "file" => {
                if rest.is_empty() {
                    return Err("usage: file <path>".to_string());
                }
                Command::SelectFile(PathBuf::from(rest))
            }
            "question" | "q" => Command::SetQuestion(rest.to_string()),
            "upload" => Command::Upload,
            "ask" if rest.is_empty() => Command::Ask(None),
            "ask" => Command::Ask(Some(rest.to_string())),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{}', type 'help'", other)),
        };

        Ok(Some(command))
    }
}
