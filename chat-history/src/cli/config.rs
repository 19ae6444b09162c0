use anyhow::{Result, bail};
use chat_history_core::conf::{CONFIG_FILE_NAME, HistoryConfig, load_config, write_config};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Write a default chat_history.json
    Init {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,
    },

    /// Load the config and print the effective values
    Check {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Init { path } => init(path),
        ConfigCmd::Check { path, json } => check(path, json),
    }
}

fn init(dir: PathBuf) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);

    // Refuse to overwrite an existing config
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    write_config(&path, &HistoryConfig::default())?;

    println!("✔ Wrote default config to {}", path.display());
    Ok(())
}

fn check(dir: PathBuf, json: bool) -> Result<()> {
    let cfg = load_config(&dir.join(CONFIG_FILE_NAME))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    println!("✔ Config loaded successfully");
    if cfg.max_messages > 0 {
        println!("✔ replaying the newest {} messages", cfg.max_messages);
    } else {
        println!("✔ replaying all messages");
    }
    println!("✔ log folder: {}", cfg.log_folder.display());
    println!(
        "✔ operator required: {}",
        if cfg.operator_required { "yes" } else { "no" }
    );

    Ok(())
}
