use clap::{Parser, Subcommand};
use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use aistudio_chat_export::{OutputFormat, export_chunks};

/// Export Google AI Studio prompt sessions to plain text or SQLite.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/aistudio-chat-export/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress the success message.
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the visible text chunks of a downloaded session.
    Export {
        /// The session JSON file downloaded from AI Studio.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Destination file: a text document, or a database with --format sqlite.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Output format: txt or sqlite.
        /// Defaults to txt if not set in config.
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
}

#[derive(Deserialize, Default)]
struct FileConfig {
    format: Option<OutputFormat>,
}

fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            return Err(eyre!("Config file not found: {}", p.display()));
        }
        Some(p.to_path_buf())
    } else {
        // Search: XDG/OS config dir, then nothing
        dirs::config_dir()
            .map(|d| d.join("aistudio-chat-export/config.toml"))
            .filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load config file (CLI path > default path)
    let file_cfg = load_file_config(cli.config.as_deref())?;

    match cli.command {
        Command::Export {
            input,
            output,
            format,
        } => {
            // 2. Resolve format (CLI > Config > txt)
            let format = format.or(file_cfg.format).unwrap_or(OutputFormat::Txt);

            // 3. Run the export
            let writer = format.writer(output.clone());
            export_chunks(&input, writer.as_ref())
                .wrap_err_with(|| format!("Failed to export {}", input.display()))?;

            if !cli.quiet {
                println!(
                    "Exported {} to {} (format: {})",
                    input.display(),
                    output.display(),
                    format
                );
            }
        }
    }

    Ok(())
}
