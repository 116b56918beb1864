use tracing::Level;
use crate::core::domain::Configuration;

// Log lines go to stderr so they never interleave with the status side-channel on stdout.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    let res = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = res {
        eprintln!("tracing already initialized: {}", err);
    }
}

// unknown names fall back to info
pub(crate) fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::INFO)
}
