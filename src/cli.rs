//! CLI definitions for TileSwitch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// TileSwitch CLI.
#[derive(Parser)]
#[command(name = "tileswitch")]
#[command(about = "Remote focus switching for video-conference tiles")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/tileswitch.toml", global = true)]
    pub config: PathBuf,

    /// Bridge base URL used by the remote-control commands
    #[arg(
        short,
        long,
        env = "TILESWITCH_BRIDGE",
        default_value = "http://127.0.0.1:3333",
        global = true
    )]
    pub bridge: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the command bridge in foreground (default)
    Serve(ServeArgs),

    /// Print the current stream list and focus position
    Status,

    /// Rescan the page and print the refreshed stream list
    Refresh,

    /// Focus a stream by id or by position
    Switch(SwitchArgs),

    /// Focus the next stream (wraps around)
    Next,

    /// Focus the previous stream (wraps around)
    Previous,

    /// Swap the focused stream with its partner tile
    Swap,

    /// Press a macro-pad button (1-based)
    Button {
        /// Button number, 1 to 32
        number: u32,
    },

    /// Follow the status channel and print every message
    Watch {
        /// Seconds between reconnection attempts
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },
}

/// Overrides for the `[server]` and `[remote]` config sections.
#[derive(Args, Default)]
pub(crate) struct ServeArgs {
    /// Bridge listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Bridge listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Remote-debugging endpoint of the browser
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub(crate) struct SwitchArgs {
    /// Stream id (tile attribute value)
    #[arg(long)]
    pub id: Option<String>,

    /// Zero-based position in the stream list
    #[arg(long)]
    pub index: Option<i64>,
}
