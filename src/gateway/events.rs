use crate::core::events::StatusEvent;
use crate::core::library::LibraryResult;

// StatusPublisher is the sink for the catalog's status side-channel.
pub trait StatusPublisher {
    fn publish(&self, event: &StatusEvent) -> LibraryResult<()>;
}

// Discards every status line.
#[derive(Debug, Default)]
pub struct SilentPublisher;

impl StatusPublisher for SilentPublisher {
    fn publish(&self, _event: &StatusEvent) -> LibraryResult<()> {
        Ok(())
    }
}
