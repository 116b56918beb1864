use std::cell::RefCell;
use std::io::{Stdout, Write};
use crate::core::events::StatusEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::StatusPublisher;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MessageFormat {
    // the bare message, one per line
    Plain,
    // the whole event as one JSON document per line
    Json,
}

#[derive(Debug)]
pub struct ConsolePublisher<W: Write> {
    out: RefCell<W>,
    format: MessageFormat,
}

impl ConsolePublisher<Stdout> {
    pub fn stdout(format: MessageFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsolePublisher<W> {
    pub fn new(out: W, format: MessageFormat) -> Self {
        Self {
            out: RefCell::new(out),
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> StatusPublisher for ConsolePublisher<W> {
    fn publish(&self, event: &StatusEvent) -> LibraryResult<()> {
        let line = match self.format {
            MessageFormat::Plain => event.message.clone(),
            MessageFormat::Json => serde_json::to_string(event)?,
        };
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}
