//! Output formatters for ranking reports

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::report::RankingReport;
use crate::processing::ranking::RankedCandidate;
use crate::processing::summary::TalentSummary;
use crate::processing::weights::Factor;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// How much of a report the text formatters show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    /// Ranked candidates to show; `None` shows all
    pub candidates: Option<usize>,
    pub skills: usize,
    pub locations: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            candidates: None,
            skills: 8,
            locations: 5,
        }
    }
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    limits: DisplayLimits,
}

/// JSON formatter for downstream tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
    limits: DisplayLimits,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn join_counts<'a>(items: impl Iterator<Item = (&'a str, usize)>) -> String {
    items
        .map(|(label, count)| format!("{} ({})", label, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn top_skills(summary: &TalentSummary, limit: usize) -> String {
    join_counts(
        summary
            .top_skills
            .iter()
            .take(limit)
            .map(|s| (s.skill.as_str(), s.count)),
    )
}

fn top_locations(summary: &TalentSummary, limit: usize) -> String {
    join_counts(
        summary
            .location_distribution
            .iter()
            .take(limit)
            .map(|l| (l.location.as_str(), l.count)),
    )
}

fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, limits: DisplayLimits) -> Self {
        Self {
            use_colors,
            detailed,
            limits,
        }
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
            _ => "▒",
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

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        let badge = score_label(score);

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_candidate(&self, ranked: &RankedCandidate) -> String {
        let result = &ranked.result;
        let mut output = String::new();

        output.push_str(&format!(
            "{:>3}. {} {}% {}\n",
            ranked.rank,
            self.colorize(result.candidate_name(), Color::Cyan),
            result.overall_score,
            self.format_score_badge(result.overall_score)
        ));

        let attributes = &result.attributes;
        let mut facts = Vec::new();
        if !attributes.role.is_empty() {
            facts.push(attributes.role.clone());
        }
        facts.push(format!("experience: {}", attributes.years_experience));
        if let Some(location) = &attributes.location {
            facts.push(location.clone());
        }
        output.push_str(&format!("     {}\n", facts.join(" | ")));

        for highlight in &result.highlights {
            output.push_str(&format!("     + {}\n", self.colorize(highlight, Color::Green)));
        }
        for concern in &result.concerns {
            output.push_str(&format!("     - {}\n", self.colorize(concern, Color::Yellow)));
        }

        if self.detailed {
            for factor in Factor::ALL {
                let weight = result.weights.get(factor);
                let mut line = format!(
                    "     {:<10} {:>5.1}% (weight {:.1}%)",
                    factor.label(),
                    result.breakdown.get(factor),
                    weight * 100.0
                );
                if result.breakdown.is_unverified(factor) {
                    line.push_str(" unverified");
                }
                output.push_str(&line);
                output.push('\n');
            }
            if !result.breakdown.missing_skills.is_empty() {
                output.push_str(&format!(
                    "     Missing skills: {}\n",
                    result.breakdown.missing_skills.join(", ")
                ));
            }
            if !result.breakdown.matched_preferred_skills.is_empty() {
                output.push_str(&format!(
                    "     Preferred skills: {}\n",
                    result.breakdown.matched_preferred_skills.join(", ")
                ));
            }
            for warning in &result.warnings {
                output.push_str(&format!("     ! {}\n", self.colorize(&warning.to_string(), Color::BrightRed)));
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("CANDIDATE RANKING: {}", report.job_title()), 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        let summary = &report.summary;
        output.push_str(&self.format_header("Talent Pool", 2));
        output.push_str(&format!("Candidates analyzed: {}\n", summary.total_candidates));
        output.push_str(&format!("Matching role: {}\n", summary.matches_by_role));
        output.push_str(&format!("Average experience: {:.1} years\n", summary.average_experience));
        if !summary.top_skills.is_empty() {
            output.push_str(&format!("Top skills: {}\n", top_skills(summary, self.limits.skills)));
        }
        if !summary.location_distribution.is_empty() {
            output.push_str(&format!("Locations: {}\n", top_locations(summary, self.limits.locations)));
        }

        if report.candidates.is_empty() {
            output.push_str(&self.format_header("No candidates could be scored", 2));
            if let Some(query) = &report.fallback_query {
                output.push_str(&format!(
                    "Try a natural-language search: {}\n",
                    self.colorize(query, Color::Cyan)
                ));
            }
        } else {
            output.push_str(&self.format_header("Ranking", 2));
            let shortlist = report.shortlist(self.limits.candidates);
            for ranked in shortlist {
                output.push_str(&self.format_candidate(ranked));
            }
            let hidden = report.candidates.len() - shortlist.len();
            if hidden > 0 {
                output.push_str(&format!("  ... and {} more\n", hidden));
            }
        }

        if !report.skipped.is_empty() {
            output.push_str(&self.format_header("Skipped Documents", 3));
            for skipped in &report.skipped {
                output.push_str(&format!(
                    "  • {} ({}): {}\n",
                    skipped.file_name,
                    skipped.id,
                    self.colorize(&skipped.reason, Color::Yellow)
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool, limits: DisplayLimits) -> Self {
        Self {
            include_metadata,
            detailed,
            limits,
        }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# Candidate Ranking: {}\n\n", report.job_title()));
        if let Some(description) = report.job.description() {
            output.push_str(&format!("> {}\n\n", description));
        }

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            let request_name = Path::new(&report.metadata.request_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.request_file.clone());
            output.push_str(&format!("**Request:** `{}`\n\n", request_name));
        }

        let summary = &report.summary;
        output.push_str("## Talent Pool\n\n");
        output.push_str(&format!("- **Candidates analyzed:** {}\n", summary.total_candidates));
        output.push_str(&format!("- **Matching role:** {}\n", summary.matches_by_role));
        output.push_str(&format!("- **Average experience:** {:.1} years\n", summary.average_experience));
        if !summary.top_skills.is_empty() {
            output.push_str(&format!("- **Top skills:** {}\n", top_skills(summary, self.limits.skills)));
        }
        if !summary.location_distribution.is_empty() {
            output.push_str(&format!("- **Locations:** {}\n", top_locations(summary, self.limits.locations)));
        }
        output.push('\n');

        if report.candidates.is_empty() {
            output.push_str("## No candidates could be scored\n\n");
            if let Some(query) = &report.fallback_query {
                output.push_str(&format!("Suggested natural-language search: _{}_\n\n", query));
            }
        } else {
            output.push_str("## Ranking\n\n");
            output.push_str("| # | Candidate | Score | Highlights | Concerns |\n");
            output.push_str("|---|-----------|-------|------------|----------|\n");
            let shortlist = report.shortlist(self.limits.candidates);
            for ranked in shortlist {
                let result = &ranked.result;
                output.push_str(&format!(
                    "| {} | {} | {}% {} | {} | {} |\n",
                    ranked.rank,
                    Self::escape_cell(result.candidate_name()),
                    result.overall_score,
                    Self::markdown_score_badge(result.overall_score),
                    Self::escape_cell(&result.highlights.join("; ")),
                    Self::escape_cell(&result.concerns.join("; "))
                ));
            }
            output.push('\n');

            if self.detailed {
                output.push_str("## Factor Breakdown\n\n");
                for ranked in shortlist {
                    let result = &ranked.result;
                    output.push_str(&format!("### {}. {}\n\n", ranked.rank, result.candidate_name()));
                    output.push_str("| Factor | Score | Weight |\n");
                    output.push_str("|--------|-------|--------|\n");
                    for factor in Factor::ALL {
                        let marker = if result.breakdown.is_unverified(factor) { " (unverified)" } else { "" };
                        output.push_str(&format!(
                            "| {}{} | {:.1}% | {:.1}% |\n",
                            factor.label(),
                            marker,
                            result.breakdown.get(factor),
                            result.weights.get(factor) * 100.0
                        ));
                    }
                    output.push('\n');
                    for warning in &result.warnings {
                        output.push_str(&format!("> ⚠️ {}\n", warning));
                    }
                    if !result.warnings.is_empty() {
                        output.push('\n');
                    }
                }
            }
        }

        if !report.skipped.is_empty() {
            output.push_str("## Skipped Documents\n\n");
            for skipped in &report.skipped {
                output.push_str(&format!("- `{}` ({}): {}\n", skipped.file_name, skipped.id, skipped.reason));
            }
            output.push('\n');
        }

        output.push_str("---\n");
        output.push_str(&format!("*Generated by talent-matcher v{}*\n", report.metadata.matcher_version));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, DisplayLimits::default())
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        limits: DisplayLimits,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, limits),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, detailed, limits),
        }
    }

    /// Generator configured from the `output` and `summary` config sections.
    pub fn from_config(config: &Config, detailed: bool, top: Option<usize>) -> Self {
        let limits = DisplayLimits {
            candidates: top,
            skills: config.summary.top_skills_shown,
            locations: config.summary.locations_shown,
        };
        Self::with_options(
            config.output.color_output,
            detailed || config.output.detailed,
            true,
            true,
            limits,
        )
    }

    pub fn generate_report(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, job_title: &str, timestamp: bool) -> String {
    let slug = job_title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_");
    let base_name = if slug.is_empty() { "candidates".to_string() } else { slug };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ranking{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ranking{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ranking{}.md", base_name, timestamp_suffix),
    }
}
