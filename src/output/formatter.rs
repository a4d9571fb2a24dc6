//! Output formatters for parsed profiles and keyword matches

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::education::EducationEntry;
use crate::processing::experience::ExperienceEntry;
use crate::processing::{MatchResult, Profile};
use colored::{Color, Colorize};
use serde::Serialize;

pub trait OutputFormatter {
    fn format_profile(&self, profile: &Profile) -> Result<String>;
    fn format_match(&self, result: &MatchResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// JSON formatter for downstream tooling. Pretty output uses a 2-space indent.
pub struct JsonFormatter {
    pretty: bool,
}

/// Human readable summary for the terminal
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_profile(&self, profile: &Profile) -> Result<String> {
        self.to_json(profile)
    }

    fn format_match(&self, result: &MatchResult) -> Result<String> {
        self.to_json(result)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_coverage_badge(&self, coverage: f64) -> String {
        let (badge, color) = match coverage {
            c if c >= 75.0 => ("STRONG", Color::Green),
            c if c >= 50.0 => ("FAIR", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn push_list(&self, output: &mut String, label: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!(
            "{} {}\n",
            self.colorize(&format!("{}:", label), Color::Cyan),
            items.join(", ")
        ));
    }

    fn format_education(entry: &EducationEntry) -> String {
        let mut parts = Vec::new();
        if let Some(degree) = &entry.degree {
            parts.push(degree.clone());
        }
        if let Some(institution) = &entry.institution {
            parts.push(institution.clone());
        }
        if let Some(year) = &entry.year {
            parts.push(year.clone());
        }
        if let Some(grade) = &entry.grade {
            parts.push(format!("grade {}", grade));
        }
        parts.join(" | ")
    }

    fn format_role(entry: &ExperienceEntry) -> String {
        match (&entry.role, &entry.company) {
            (Some(role), Some(company)) => format!("{} @ {}", role, company),
            (Some(role), None) => role.clone(),
            (None, Some(company)) => company.clone(),
            (None, None) => "(untitled role)".to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_profile(&self, profile: &Profile) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME PROFILE", 1));
        let name = if profile.name.is_empty() {
            "(name not detected)"
        } else {
            profile.name.as_str()
        };
        output.push_str(&format!("Name: {}\n", self.colorize(name, Color::Cyan)));

        output.push_str(&self.format_header("Contact", 2));
        let contact = &profile.contact;
        self.push_list(&mut output, "Email", &contact.emails);
        self.push_list(&mut output, "Phone", &contact.phones);
        self.push_list(&mut output, "LinkedIn", &contact.linkedin);
        self.push_list(&mut output, "GitHub", &contact.github);
        self.push_list(&mut output, "Portfolio", &contact.portfolio);

        if !profile.skills.is_empty() {
            output.push_str(&self.format_header("Skills", 2));
            output.push_str(&format!("{}\n", profile.skills.join(", ")));
        }

        if !profile.experience.is_empty() {
            output.push_str(&self.format_header("Experience", 2));
            for entry in &profile.experience {
                output.push_str(&format!(
                    "  {}",
                    self.colorize(&Self::format_role(entry), Color::Green)
                ));
                if let Some(dates) = &entry.dates {
                    output.push_str(&format!(" ({})", dates));
                }
                output.push('\n');
                for bullet in &entry.bullets {
                    output.push_str(&format!("    • {}\n", bullet));
                }
                for line in &entry.description {
                    output.push_str(&format!("    {}\n", line));
                }
            }
        }

        if !profile.education.is_empty() {
            output.push_str(&self.format_header("Education", 2));
            for entry in &profile.education {
                output.push_str(&format!("  • {}\n", Self::format_education(entry)));
            }
        }

        if !profile.certifications.is_empty() || !profile.languages.is_empty() {
            output.push_str(&self.format_header("Other", 2));
            self.push_list(&mut output, "Certifications", &profile.certifications);
            self.push_list(&mut output, "Languages", &profile.languages);
        }

        Ok(output)
    }

    fn format_match(&self, result: &MatchResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("KEYWORD MATCH", 1));
        output.push_str(&format!(
            "Coverage: {:.2}% {}\n",
            result.coverage,
            self.format_coverage_badge(result.coverage)
        ));
        output.push_str(&format!(
            "Matched {} of {} job keywords\n",
            result.found_in_resume.len(),
            result.job_top_keywords.len()
        ));

        if !result.found_in_resume.is_empty() {
            output.push_str(&self.format_header("Found in resume", 3));
            for keyword in &result.found_in_resume {
                output.push_str(&format!("  ✓ {}\n", self.colorize(keyword, Color::Green)));
            }
        }

        let missing: Vec<&String> = result
            .job_top_keywords
            .iter()
            .filter(|keyword| !result.found_in_resume.contains(keyword))
            .collect();
        if !missing.is_empty() {
            output.push_str(&self.format_header("Missing from resume", 3));
            for keyword in missing {
                output.push_str(&format!("  ✗ {}\n", self.colorize(keyword, Color::Yellow)));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
    }
}
