mod cli;
mod terminal;

use chat_history_core::logging::{default_log_format, init_logging};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chat-history",
    version,
    about = "Chat history replay: inspect what a rejoining player would see"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the history a joining operator would receive
    Replay {
        /// Server game directory the log folder is resolved against
        #[arg(long, default_value = ".")]
        game_dir: PathBuf,

        /// Directory holding chat_history.json
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,

        /// Also read the uncompressed latest.log
        #[arg(long)]
        include_latest: bool,

        /// Override maxMessages from the config
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Classify raw log lines read from stdin
    Classify {
        /// Print discarded lines with their reason
        #[arg(long)]
        show_discarded: bool,

        /// Print events as JSON objects
        #[arg(long)]
        json: bool,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(default_log_format());

    let result = match cli.command {
        Command::Replay {
            game_dir,
            config_dir,
            include_latest,
            limit,
        } => cli::replay::run(cli::replay::ReplayArgs {
            game_dir,
            config_dir,
            include_latest,
            limit,
        }),
        Command::Classify {
            show_discarded,
            json,
        } => cli::classify::run(show_discarded, json),
        Command::Config { cmd } => cli::config::run(cmd),
    };

    if let Err(e) = result {
        eprintln!("chat-history error: {e:#}");
        std::process::exit(1);
    }
}
