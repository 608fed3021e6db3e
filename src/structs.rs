use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Path of the TOML config file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the tracker and its HTTP adapters (the default).
    Tracker,
    /// Run a peer that shares its directories until interrupted.
    Peer,
    /// Join the network, print the hosters of every file matching the keyword, and leave.
    Search {
        keyword: String,
    },
    /// Join the network, download a file from the first peer offering it, and leave.
    Download {
        filename: String,
    },
}
