//! CLI interface for the resume parser

use crate::config::OutputFormat;
use crate::error::{Result, ResumeParserError};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for résumés and job descriptions
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "resume-parser")]
#[command(about = "Heuristic resume parser and job description keyword scorer")]
#[command(
    long_about = "Extract a structured profile (contact, skills, education, experience) from a resume and measure how many of a job description's top keywords it covers"
)]
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
    /// Parse a resume into a JSON profile, optionally scoring it against a job description
    Parse {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Directory for resume_profile.json and job_match.json
        #[arg(short, long)]
        outdir: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Score keyword coverage of a job description by a resume
    Score {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long)]
        format: Option<String>,
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
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension. Legacy `.doc` and unknown extensions fail with
/// the same error kinds the input layer reports.
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else if ext.eq_ignore_ascii_case("doc") {
                Err(ResumeParserError::UnsupportedLegacyFormat(
                    ".doc not supported; please convert to .docx".to_string(),
                ))
            } else {
                Err(ResumeParserError::UnsupportedFormat(format!(
                    "Unsupported file extension .{} for: {}. Allowed: {}",
                    ext,
                    path.display(),
                    allowed_extensions.join(", ")
                )))
            }
        }
        None => Err(ResumeParserError::UnsupportedFormat(format!(
            "File has no extension: {}",
            path.display()
        ))),
    }
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
    fn test_parse_command_arguments() {
        let cli = Cli::try_parse_from([
            "resume-parser",
            "parse",
            "--resume",
            "cv.pdf",
            "--job",
            "jd.txt",
            "--outdir",
            "out",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Parse {
                resume,
                job,
                outdir,
                format,
            } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(job, Some(PathBuf::from("jd.txt")));
                assert_eq!(outdir, Some(PathBuf::from("out")));
                assert!(format.is_none());
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_score_requires_job() {
        assert!(Cli::try_parse_from(["resume-parser", "score", "--resume", "cv.pdf"]).is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), SUPPORTED_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), SUPPORTED_EXTENSIONS).is_ok());

        match validate_file_extension(Path::new("cv.doc"), SUPPORTED_EXTENSIONS) {
            Err(ResumeParserError::UnsupportedLegacyFormat(message)) => {
                assert_eq!(message, ".doc not supported; please convert to .docx");
            }
            other => panic!("expected legacy format error, got {:?}", other),
        }

        assert!(matches!(
            validate_file_extension(Path::new("cv.rtf"), SUPPORTED_EXTENSIONS),
            Err(ResumeParserError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            validate_file_extension(Path::new("README"), SUPPORTED_EXTENSIONS),
            Err(ResumeParserError::UnsupportedFormat(_))
        ));
    }
}
