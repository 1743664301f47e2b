use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "slugline",
    version,
    about = "Screenplay text parser for video segment generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a screenplay file without emitting output
    Check {
        /// Screenplay file path
        script: PathBuf,
    },
    /// Parse a screenplay file and print the structured document as JSON
    Dump {
        /// Screenplay file path
        script: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { script } => {
            let screenplay = slugline::parse_screenplay_file(&script)?;
            let turns: usize = screenplay.scenes.iter().map(|s| s.dialogue.len()).sum();
            println!(
                "Screenplay '{}' is valid: {} scenes, {} acts, {} dialogue turns",
                script.display(),
                screenplay.scenes.len(),
                screenplay.acts.len(),
                turns
            );
            for scene in &screenplay.scenes {
                println!(
                    "  {}  {}. {} - {} ({}s)",
                    scene.scene_id,
                    scene.time_of_day,
                    scene.location,
                    scene.time_period,
                    scene.duration_estimate
                );
            }
            Ok(())
        }
        Commands::Dump { script, pretty } => {
            let screenplay = slugline::parse_screenplay_file(&script)?;
            let json = if pretty {
                serde_json::to_string_pretty(&screenplay)?
            } else {
                serde_json::to_string(&screenplay)?
            };
            println!("{json}");
            Ok(())
        }
    }
}
