//! arbiter-demo binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use arbiter_demo::cli::{git_sha, Cli, Commands, ConfigCommands};
use arbiter_demo::pages::Route;
use arbiter_demo::theme::init_theme;
use arbiter_demo::{logging, Config};

use commands::play::PlayOptions;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Config commands run even when the file does not parse
    if let Some(Commands::Config(cmd)) = &cli.command {
        if let Ok(config) = Config::load() {
            init_theme(config.ui.theme);
        }
        return match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(*yes),
        };
    }

    let config = Config::load()?;
    init_theme(config.ui.theme);

    match logging::init(&config.logging) {
        Ok(path) => info!(
            version = env!("CARGO_PKG_VERSION"),
            sha = git_sha().unwrap_or("-"),
            log = ?path,
            "arbiter-demo starting"
        ),
        Err(e) => warn!(error = %e, "logging disabled"),
    }

    match cli.command {
        None | Some(Commands::Landing) => commands::site::handle_site(
            &config,
            Route::Landing,
            commands::site::demo_options(&config, None, None),
        ),
        Some(Commands::Demo { step, function }) => commands::site::handle_site(
            &config,
            Route::Demo,
            commands::site::demo_options(&config, Some(step), function),
        ),
        Some(Commands::Play {
            file,
            skip,
            line_delay,
            char_delay,
        }) => commands::play::handle_play(
            &config,
            PlayOptions {
                file: file.as_deref(),
                skip,
                line_delay_ms: line_delay,
                char_delay_ms: char_delay,
            },
        ),
        // Handled before the config is loaded
        Some(Commands::Config(_)) => Ok(()),
        Some(Commands::Completions { shell }) => commands::completions::handle_completions(shell),
    }
}
