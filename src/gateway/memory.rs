use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::StatusEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::StatusPublisher;

// Keeps every published event; clones share the same buffer, so a test can hand one
// clone to the catalog and read the captured lines from another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<StatusEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StatusEvent> {
        self.events.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.message.clone()).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl StatusPublisher for MemoryPublisher {
    fn publish(&self, event: &StatusEvent) -> LibraryResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
