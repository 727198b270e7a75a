use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod clipboard;
mod commands;
mod config;
mod embed;
mod errors;
mod extract;
mod render;
mod session;
mod share;
#[cfg(test)]
mod tests;
mod video_id;
mod view;

use cli::{Command, LocationArgs};
use clipboard::SystemClipboard;
use config::Config;
use render::PageRenderer;
use session::Session;
use view::ViewController;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = cli::Args::parse();
    let command = args.command.unwrap_or(Command::Session {
        location_args: LocationArgs::default(),
    });

    run(command, || Config::load().context("failed to load config"))
}

/// Runs one command. The config is only loaded by commands that use it.
fn run(command: Command, load_config: impl Fn() -> anyhow::Result<Config>) -> anyhow::Result<()> {
    match command {
        Command::Extract { input, json } => {
            let report = commands::ExtractReport::new(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if let Some(video_id) = &report.video_id {
                println!("{video_id}");
            }

            report.require_video_id()?;
            Ok(())
        }

        Command::Embed { input } => {
            println!("{}", commands::embed_output(&input)?);
            Ok(())
        }

        Command::Share {
            input,
            location_args,
        } => {
            let config = load_config()?;
            let location =
                commands::resolve_location(&config, location_args.location.as_deref())?;
            println!("{}", commands::share_output(&location, &input));
            Ok(())
        }

        Command::Page {
            input,
            output,
            location_args,
        } => {
            let config = load_config()?;
            let location =
                commands::resolve_location(&config, location_args.location.as_deref())?;
            let html = commands::page_output(&config, location, input)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("failed to write page to {}", path.display()))?;
                    log::info!("page written to {}", path.display());
                }
                None => print!("{html}"),
            }
            Ok(())
        }

        Command::Session { location_args } => {
            let config = load_config()?;
            let location =
                commands::resolve_location(&config, location_args.location.as_deref())?;
            let view = ViewController::new(&config.default_input, location);
            let clipboard = SystemClipboard::new(config.clipboard_command.clone());
            if clipboard.command().is_none() {
                log::warn!("no clipboard command found; copy actions will do nothing");
            }

            Session::new(view, &clipboard, PageRenderer::new()?, config.page_meta()).run()
        }
    }
}
