use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// One read from the operator.
pub enum ReadResult {
    Line(String),
    Eof,
}

/// Where operator lines come from. The monitor only needs one line at a
/// time; recall history is the editor's own affair.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;
}

/// Production editor backed by rustyline, with in-process recall history.
pub struct RustylineEditor {
    inner: DefaultEditor,
}

impl RustylineEditor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: DefaultEditor::new()?,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.inner.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.inner.add_history_entry(line.as_str());
                }
                Ok(ReadResult::Line(line))
            }
            // Ctrl-D ends the session; treat Ctrl-C the same way.
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(ReadResult::Eof),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{LineEditor, ReadResult};
    use anyhow::Result;

    /// Feeds a fixed script of lines, then EOF. Counts how many lines were
    /// actually consumed so tests can assert batch mode reads nothing.
    pub(crate) struct ScriptedEditor {
        lines: Vec<String>,
        next: usize,
    }

    impl ScriptedEditor {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                next: 0,
            }
        }

        pub fn lines_consumed(&self) -> usize {
            self.next
        }
    }

    impl LineEditor for ScriptedEditor {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            match self.lines.get(self.next) {
                Some(line) => {
                    self.next += 1;
                    Ok(ReadResult::Line(line.clone()))
                }
                None => Ok(ReadResult::Eof),
            }
        }
    }
}
