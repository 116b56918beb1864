use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog entities
pub trait Identifiable {
    fn id(&self) -> String;
}

// MalformedLinePolicy decides what an import does with a line it cannot parse.
// Books appended before the line are kept either way.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum MalformedLinePolicy {
    Abort,
    Skip,
}

// Configuration abstracts config options for the book collection
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub owner: String,
    pub import_separator: char,
    pub malformed_lines: MalformedLinePolicy,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(owner: &str) -> Self {
        Configuration {
            owner: owner.to_string(),
            import_separator: ';',
            malformed_lines: MalformedLinePolicy::Abort,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    pub fn with_malformed_lines(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }

    /// Overlays `BOOKSHELF_*` environment variables on the defaults. Only the
    /// binary calls this; the catalog itself never reads the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let owner = lookup("BOOKSHELF_OWNER").unwrap_or_else(|| "default".to_string());
        let mut config = Configuration::new(owner.as_str());
        if let Some(level) = lookup("BOOKSHELF_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(json) = lookup("BOOKSHELF_JSON_LOGS") {
            config.json_logs = is_truthy(json.as_str());
        }
        if let Some(skip) = lookup("BOOKSHELF_SKIP_MALFORMED") {
            if is_truthy(skip.as_str()) {
                config.malformed_lines = MalformedLinePolicy::Skip;
            }
        }
        config
    }
}

fn is_truthy(val: &str) -> bool {
    matches!(val.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
