//! NEF CLI - Command-line interface
//!
//! Usage:
//!   nef extract <text> [--gazetteer <path>] [--pretty]
//!   nef labels

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nef_core::ModelConfig;
use nef_extractor::{GazetteerModel, NamedEntityClient, LABEL_MAP};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nef")]
#[command(about = "Named Entity Finder CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find named entities in a sentence and print them as JSON
    Extract {
        /// Text to analyze
        text: String,
        /// Gazetteer TOML file (defaults to the built-in dictionary)
        #[arg(long, env = "NEF_GAZETTEER")]
        gazetteer: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the model label to public label table
    Labels,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            text,
            gazetteer,
            pretty,
        } => {
            let config = ModelConfig {
                gazetteer_path: gazetteer,
                ..ModelConfig::default()
            };
            let client = NamedEntityClient::new(GazetteerModel::from_config(&config)?);
            let result = client.get_ents(&text)?;

            let output = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{output}");
        }
        Commands::Labels => {
            for (internal, public) in LABEL_MAP {
                println!("{internal} -> {public}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from(["nef", "extract", "Madison is a city", "--pretty"]).unwrap();
        match cli.command {
            Commands::Extract { text, pretty, .. } => {
                assert_eq!(text, "Madison is a city");
                assert!(pretty);
            }
            Commands::Labels => panic!("expected extract"),
        }
    }
}
