use crate::core::events::StatusEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::StatusPublisher;

// Hands the message text of each event to a caller-supplied function.
pub struct CallbackPublisher<F: Fn(&str)> {
    callback: F,
}

impl<F: Fn(&str)> CallbackPublisher<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F: Fn(&str)> StatusPublisher for CallbackPublisher<F> {
    fn publish(&self, event: &StatusEvent) -> LibraryResult<()> {
        (self.callback)(event.message.as_str());
        Ok(())
    }
}
