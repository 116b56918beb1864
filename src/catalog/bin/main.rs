use std::io;
use std::process::ExitCode;
use clap::Parser;
use tracing::{error, info};
use bookshelf::catalog::controller::Shell;
use bookshelf::catalog::domain::CatalogService;
use bookshelf::catalog::factory::create_catalog;
use bookshelf::core::controller::{AppState, Cli};
use bookshelf::utils::logs::setup_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let state = AppState::from_env();
    setup_tracing(&state.config);

    let mut catalog = create_catalog(&state.config, state.via);
    for path in &cli.files {
        let summary = catalog.add_books_from_file(path);
        info!("preloaded {} books from {}", summary.added, path.display());
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(&mut catalog, stdin.lock(), io::stdout());
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("shell stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}
