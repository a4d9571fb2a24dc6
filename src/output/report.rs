//! Report files written next to each other in an output directory

use crate::error::Result;
use crate::output::formatter::{JsonFormatter, OutputFormatter};
use crate::processing::{MatchResult, Profile};
use log::info;
use std::fs;
use std::path::PathBuf;

pub const PROFILE_FILE_NAME: &str = "resume_profile.json";
pub const MATCH_FILE_NAME: &str = "job_match.json";

pub struct ReportWriter {
    output_dir: PathBuf,
    formatter: JsonFormatter,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            formatter: JsonFormatter::new(true),
        }
    }

    /// Writes `resume_profile.json` and returns its path
    pub fn write_profile(&self, profile: &Profile) -> Result<PathBuf> {
        let content = self.formatter.format_profile(profile)?;
        self.write_file(PROFILE_FILE_NAME, &content)
    }

    /// Writes `job_match.json` and returns its path
    pub fn write_match(&self, result: &MatchResult) -> Result<PathBuf> {
        let content = self.formatter.format_match(result)?;
        self.write_file(MATCH_FILE_NAME, &content)
    }

    fn write_file(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, content)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}
