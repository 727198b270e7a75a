use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Page location to start from. Its `url` query parameter seeds the input,
    /// and share links are built on it. Defaults to `page_url` from config.
    #[clap(short, long)]
    pub location: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the video id found in a link or raw id
    Extract {
        /// A youtube link or 11-character video id
        #[clap(allow_hyphen_values = true)]
        input: String,

        /// Print a json object instead of the bare id
        #[clap(long, default_value = "false")]
        json: bool,
    },
    /// Print the embed url for a link or raw id
    Embed {
        /// A youtube link or 11-character video id
        #[clap(allow_hyphen_values = true)]
        input: String,
    },
    /// Print the shareable page url for an input
    Share {
        /// Input to carry on the page url
        #[clap(allow_hyphen_values = true)]
        input: String,

        #[clap(flatten)]
        location_args: LocationArgs,
    },
    /// Render the player page as html
    Page {
        /// Submit this input instead of the seeded one
        #[clap(short, long, allow_hyphen_values = true)]
        input: Option<String>,

        /// Write to a file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,

        #[clap(flatten)]
        location_args: LocationArgs,
    },
    /// Interactive viewer session (default)
    Session {
        #[clap(flatten)]
        location_args: LocationArgs,
    },
}
