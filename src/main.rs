//! Resume parser: structured profiles and keyword coverage from resumes

use clap::Parser;
use log::{debug, error, info};
use resume_parser::cli::{self, Cli, Commands, ConfigAction};
use resume_parser::config::{Config, OutputFormat};
use resume_parser::input::InputManager;
use resume_parser::output::{formatter_for, ReportWriter};
use resume_parser::processing::{normalize, KeywordScorer, ResumeParser};
use resume_parser::{Result, ResumeParserError};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone();
    let config = match &config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Parse {
            resume,
            job,
            outdir,
            format,
        } => {
            validate_input(&resume)?;
            if let Some(job) = &job {
                validate_input(job)?;
            }
            let output_format = resolve_format(format.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let resume_text = normalize(&input_manager.extract_text(&resume).await?);
            debug!("Resume text length: {} characters", resume_text.len());

            let parser = ResumeParser::new(config.parsing.clone());
            let profile = parser.parse(&resume_text);

            let formatter = formatter_for(output_format, config.output.color_output);
            println!("{}", formatter.format_profile(&profile)?);

            let writer = ReportWriter::new(outdir.unwrap_or_else(|| config.output.output_dir.clone()));
            let profile_path = writer.write_profile(&profile)?;
            println!("Saved: {}", profile_path.display());

            if let Some(job) = job {
                let job_text = normalize(&input_manager.extract_text(&job).await?);
                let scorer = KeywordScorer::new(&config.scoring);
                let result = scorer.score(&resume_text, &job_text);

                println!("{}", formatter.format_match(&result)?);
                let match_path = writer.write_match(&result)?;
                println!("Saved: {}", match_path.display());
            }
        }

        Commands::Score {
            resume,
            job,
            format,
        } => {
            validate_input(&resume)?;
            validate_input(&job)?;
            let output_format = resolve_format(format.as_deref(), &config)?;

            info!("Scoring {} against {}", resume.display(), job.display());

            let mut input_manager = InputManager::new();
            let resume_text = normalize(&input_manager.extract_text(&resume).await?);
            let job_text = normalize(&input_manager.extract_text(&job).await?);

            let scorer = KeywordScorer::new(&config.scoring);
            let result = scorer.score(&resume_text, &job_text);

            let formatter = formatter_for(output_format, config.output.color_output);
            println!("{}", formatter.format_match(&result)?);
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Current Configuration ({})\n", path.display());
                    println!("Parsing:");
                    println!("  Name scan lines: {}", config.parsing.name_scan_lines);
                    println!("  Name max chars: {}", config.parsing.name_max_chars);
                    println!(
                        "  Name capitalized ratio: {:.2}",
                        config.parsing.name_min_capitalized_ratio
                    );
                    println!("  Max skill chars: {}", config.parsing.max_skill_chars);
                    println!("  Max portfolio URLs: {}", config.parsing.max_portfolio_urls);
                    println!("\nScoring:");
                    println!("  Top keywords: {}", config.scoring.top_keywords);
                    println!("  Min keyword chars: {}", config.scoring.min_keyword_chars);
                    println!("\nOutput:");
                    println!("  Directory: {}", config.output.output_dir.display());
                    println!("  Format: {:?}", config.output.format);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn validate_input(path: &Path) -> Result<()> {
    cli::validate_file_extension(path, cli::SUPPORTED_EXTENSIONS)
}

fn resolve_format(format: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match format {
        Some(format) => cli::parse_output_format(format).map_err(ResumeParserError::InvalidInput),
        None => Ok(config.output.format),
    }
}
