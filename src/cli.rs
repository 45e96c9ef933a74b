//! CLI interface for the talent matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "talent-matcher")]
#[command(about = "Rank candidate résumés against a job profile")]
#[command(long_about = "Score extracted candidate attributes against a job profile, rank the pool and summarize it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank the candidates of a request file
    Rank {
        /// Path to the request file (JSON, TOML)
        #[arg(short, long)]
        request: PathBuf,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show per-factor breakdown for each candidate
        #[arg(short, long)]
        detailed: bool,

        /// Only show the first N candidates
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["json", "toml"];
        assert!(validate_file_extension(Path::new("req.JSON"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("req.yaml"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("request"), &allowed).is_err());
    }

    #[test]
    fn test_rank_arguments() {
        let cli = Cli::try_parse_from([
            "talent-matcher",
            "rank",
            "--request",
            "req.json",
            "--top",
            "3",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Rank { request, top, output, .. } => {
                assert_eq!(request, PathBuf::from("req.json"));
                assert_eq!(top, Some(3));
                assert!(output.is_none());
            }
            _ => panic!("expected rank command"),
        }
    }
}
