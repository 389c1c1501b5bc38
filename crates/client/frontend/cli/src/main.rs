//! Terminal client entry point.
use std::io;

use anyhow::Result;
use arena_cli::{App, CliConfig};
use arena_content::{Roster, RosterLoader};
use arena_runtime::Session;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();

    let roster = match &config.roster_path {
        Some(path) => RosterLoader::load(path)?,
        None => Roster::standard(),
    };
    let session = Session::new(roster, config.session_config());

    let stdin = io::stdin();
    let stdout = io::stdout();
    App::new(session).run(&mut stdin.lock(), &mut stdout.lock())
}
