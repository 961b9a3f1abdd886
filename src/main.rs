mod app;
mod cli;
mod core;
mod error;
mod logging;
mod tui;

use crate::cli::{Cli, Settings};
use crate::core::GeminiClient;
use crate::tui::{Console, PlainConsole, TerminalConsole};
use clap::Parser;
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    // .env has to be loaded before clap reads GEMINI_API_KEY
    cli::load_env_file();

    let cli = Cli::parse();

    let settings = match Settings::try_from(cli) {
        Ok(settings) => settings,
        Err(err) => {
            PlainConsole::new(io::stdout()).error(&err);
            return err.exit_code();
        }
    };

    let plain = tui::wants_plain(settings.plain);
    let client = GeminiClient::new(&settings.api_key)
        .with_model(&settings.model)
        .with_base_url(&settings.api_base);

    if plain {
        return execute(&settings, client, PlainConsole::new(io::stdout())).await;
    }

    match TerminalConsole::new() {
        Ok(console) => execute(&settings, client, console).await,
        Err(err) => {
            tracing::debug!(error = %err, "Terminal unavailable, falling back to plain output");
            execute(&settings, client, PlainConsole::new(io::stdout())).await
        }
    }
}

async fn execute<K: Console>(settings: &Settings, client: GeminiClient, mut console: K) -> ExitCode {
    match app::run(settings, client, &mut console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Run failed");
            console.error(&err);
            err.exit_code()
        }
    }
}
