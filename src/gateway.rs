pub mod callback;
pub mod console;
pub mod events;
pub mod factory;
pub mod memory;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PublisherVia {
    Stdout,
    Json,
    Silent,
}

impl From<String> for PublisherVia {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" => PublisherVia::Json,
            "silent" => PublisherVia::Silent,
            _ => PublisherVia::Stdout,
        }
    }
}
