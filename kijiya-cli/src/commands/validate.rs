//! `kijiya validate <article.md>` — boundary quality report for a draft.
//!
//! Reporting only: these are the coarse word-count/structure heuristics of
//! the surrounding workflow, deliberately kept out of the core crates.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

/// Arguments for `kijiya validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the article draft to check.
    pub article: PathBuf,
}

/// Coarse per-article quality signals.
#[derive(Debug, PartialEq, Eq)]
struct QualityReport {
    char_count: usize,
    has_title: bool,
    has_conclusion: bool,
}

impl QualityReport {
    /// Character count is the measure for Japanese copy; a heading marker
    /// stands in for "has a title", まとめ/おわりに for "has a conclusion".
    fn from_content(content: &str) -> Self {
        QualityReport {
            char_count: content.chars().count(),
            has_title: content.contains('#'),
            has_conclusion: content.contains("まとめ") || content.contains("おわりに"),
        }
    }
}

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "check")]
    check: &'static str,
    #[tabled(rename = "result")]
    result: String,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        if !self.article.exists() {
            bail!("article file not found: {}", self.article.display());
        }
        let content = fs::read_to_string(&self.article)
            .with_context(|| format!("failed to read '{}'", self.article.display()))?;
        let report = QualityReport::from_content(&content);

        let rows = vec![
            CheckRow {
                check: "characters",
                result: report.char_count.to_string(),
            },
            CheckRow {
                check: "title heading",
                result: yes_no(report.has_title),
            },
            CheckRow {
                check: "conclusion section",
                result: yes_no(report.has_conclusion),
            },
        ];
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{table}");
        Ok(())
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_owned()
}
