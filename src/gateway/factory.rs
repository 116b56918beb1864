use crate::gateway::console::{ConsolePublisher, MessageFormat};
use crate::gateway::events::{SilentPublisher, StatusPublisher};
use crate::gateway::PublisherVia;

pub fn create_publisher(via: PublisherVia) -> Box<dyn StatusPublisher> {
    match via {
        PublisherVia::Stdout => {
            Box::new(ConsolePublisher::stdout(MessageFormat::Plain))
        }
        PublisherVia::Json => {
            Box::new(ConsolePublisher::stdout(MessageFormat::Json))
        }
        PublisherVia::Silent => {
            Box::new(SilentPublisher)
        }
    }
}
