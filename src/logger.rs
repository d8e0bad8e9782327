//! Optional append-mode session log. Disabled until `open` is called, after
//! which dispatched commands and engine runs are recorded. Logging never
//! influences monitor behavior; write failures are swallowed.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
    sync::{Mutex, OnceLock},
};

#[derive(Debug)]
pub struct SessionLog {
    sink: Mutex<Option<std::fs::File>>,
}

impl SessionLog {
    fn new() -> Self {
        Self {
            sink: Mutex::new(None),
        }
    }

    pub fn open<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        if let Ok(mut guard) = self.sink.lock() {
            *guard = Some(file);
        }
        Ok(())
    }

    pub fn write(&self, entry: &str) {
        if let Ok(mut guard) = self.sink.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = writeln!(file, "{entry}");
            }
        }
    }
}

static LOG: OnceLock<SessionLog> = OnceLock::new();

pub fn global() -> &'static SessionLog {
    LOG.get_or_init(SessionLog::new)
}

pub fn record(entry: &str) {
    global().write(entry);
}
