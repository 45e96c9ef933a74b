//! Talent matcher: rank candidate résumés against a job profile

use clap::Parser;
use log::{error, info, warn};
use std::process;
use talent_matcher::cli::{self, Cli, Commands, ConfigAction};
use talent_matcher::config::Config;
use talent_matcher::error::{Result, TalentMatcherError};
use talent_matcher::input::InputManager;
use talent_matcher::output::formatter::{save_report_to_file, suggest_filename};
use talent_matcher::output::{RankingReport, ReportGenerator};
use talent_matcher::processing::analyzer::AnalysisEngine;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_override: Option<std::path::PathBuf>) -> Result<()> {
    match command {
        Commands::Rank {
            request,
            output,
            save,
            detailed,
            top,
        } => {
            cli::validate_file_extension(&request, &["json", "toml"])
                .map_err(|e| TalentMatcherError::InvalidInput(format!("Request file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(TalentMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            info!("Loading request from {}", request.display());
            let mut input_manager = InputManager::new();
            let analysis_request = input_manager.load_request(&request).await?;

            if analysis_request.job_requirements.title.trim().is_empty() {
                return Err(TalentMatcherError::InvalidInput(
                    "Job profile must have a title".to_string(),
                ));
            }

            let engine = AnalysisEngine::new(&config);
            let outcome = engine.analyze(&analysis_request)?;
            info!(
                "Scored {} candidate(s), skipped {} document(s) in {}ms",
                outcome.results.len(),
                outcome.skipped.len(),
                outcome.processing_time_ms
            );
            if let Some(query) = &outcome.fallback_query {
                warn!("No candidates could be scored; fallback search query: {}", query);
            }

            let report = RankingReport::from_outcome(outcome, request.to_string_lossy());
            let generator = ReportGenerator::from_config(&config, detailed, top);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, report.job_title(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => {
            let path = config_override.clone().unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("File: {}", path.display());
                    println!("\nScoring:");
                    println!("  Highlight threshold: {:.0}", config.scoring.highlight_threshold);
                    println!("  Concern threshold: {:.0}", config.scoring.concern_threshold);
                    println!("  Preferred skill bonus: {:.0}", config.scoring.preferred_skill_bonus);
                    println!("\nSummary:");
                    println!("  Role match: {:?}", config.summary.role_match);
                    println!("  Top skills shown: {}", config.summary.top_skills_shown);
                    println!("  Locations shown: {}", config.summary.locations_shown);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Detailed: {}", config.output.detailed);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    match &config_override {
                        Some(custom) => Config::default().save_to(custom)?,
                        None => Config::default().save()?,
                    }
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
