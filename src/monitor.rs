//! The command console: reads operator lines, dispatches verbs, and owns
//! the watchpoint pool for the session.

pub mod commands;
pub mod eval;
pub mod printers;
pub mod watchpoints;

use anyhow::Result;

use crate::editor::{LineEditor, ReadResult};
use crate::logger;
use crate::machine::Machine;
use commands::Outcome;
use watchpoints::WatchpointPool;

pub const PROMPT: &str = "(monitor) ";

/// Decided once at startup, before the loop runs, and never changed after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch,
}

/// One monitor session: the machine under control plus the session-owned
/// watchpoint pool. Command handlers reach both through this.
pub struct Monitor<'m> {
    pub(crate) machine: &'m mut dyn Machine,
    pub(crate) watchpoints: WatchpointPool,
}

impl<'m> Monitor<'m> {
    pub fn new(machine: &'m mut dyn Machine) -> Self {
        Self {
            machine,
            watchpoints: WatchpointPool::new(),
        }
    }

    /// Drive the session to completion. Batch mode issues one unconditional
    /// continue and returns without touching the editor; interactive mode
    /// loops until end of input or until a command asks to exit.
    pub fn run(&mut self, mode: Mode, editor: &mut dyn LineEditor) -> Result<()> {
        if mode == Mode::Batch {
            logger::record("batch: continue");
            self.machine.execute(-1);
            return Ok(());
        }
        loop {
            let line = match editor.read_line(PROMPT)? {
                ReadResult::Line(line) => line,
                ReadResult::Eof => break,
            };
            let Some((verb, args)) = split_command(&line) else {
                continue;
            };
            logger::record(&format!("dispatch: {}", line.trim()));
            if commands::dispatch(self, verb, args) == Outcome::Exit {
                break;
            }
        }
        Ok(())
    }
}

/// First whitespace-delimited token is the verb; the trimmed remainder, if
/// any, is the argument tail. Blank lines carry no verb at all.
fn split_command(line: &str) -> Option<(&str, Option<&str>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => {
            let rest = rest.trim();
            Some((verb, (!rest.is_empty()).then_some(rest)))
        }
        None => Some((trimmed, None)),
    }
}
