//! Workbook extraction for kijiya.
//!
//! [`extract_plan`] recovers a [`ContentPlan`] from an order workbook: the
//! customer profile from the customer-info sheet, content items from the
//! keyword-info row scan, and article rules when the optional rules sheet is
//! present. Extraction is a pure function of the workbook — no side effects
//! beyond reads, no partial plan on failure.

mod extract;
pub mod schema;
mod sheet;

use std::path::Path;

use calamine::{open_workbook, Xlsx};
use thiserror::Error;

use kijiya_core::{ContentPlan, SheetNames};

pub use extract::{extract_article_rules, extract_customer_info, extract_keyword_info};
pub use sheet::SheetGrid;

/// Errors from workbook extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Errors bubbled up from the workbook reader.
    #[error("workbook read error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// A required sheet is absent from the workbook.
    #[error("required sheet '{name}' not found in workbook")]
    MissingSheet { name: String },
}

/// Extract a full content plan from the workbook at `path`.
///
/// The customer-info and keyword-info sheets are required; the rules sheet
/// is optional and its absence yields an empty rules mapping.
pub fn extract_plan(path: &Path, sheets: &SheetNames) -> Result<ContentPlan, ExtractError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let customer = sheet::required_sheet(&mut workbook, &sheets.customer_info)?;
    let keywords = sheet::required_sheet(&mut workbook, &sheets.keyword_info)?;
    let rules = sheet::optional_sheet(&mut workbook, &sheets.article_rules)?;

    let profile = extract_customer_info(&customer);
    let items = extract_keyword_info(&keywords);
    let rules = rules.map(|grid| extract_article_rules(&grid)).unwrap_or_default();

    tracing::debug!(
        "extracted {} content items from '{}'",
        items.len(),
        path.display()
    );

    Ok(ContentPlan {
        profile,
        items,
        rules,
        source_file: path.to_path_buf(),
    })
}
