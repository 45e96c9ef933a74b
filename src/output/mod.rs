//! Report rendering: console, JSON and Markdown

pub mod formatter;
pub mod report;

pub use formatter::{ReportGenerator, DisplayLimits};
pub use report::RankingReport;
