//! Column schema for the order workbook.
//!
//! The extraction contract is positional: every sheet is read by fixed
//! column index and fixed label/marker strings. Keeping all of them here
//! makes a layout change a one-place edit and lets tests pin the exact
//! columns.

// ---------------------------------------------------------------------------
// Customer-info sheet — key–value rows
// ---------------------------------------------------------------------------

/// Label column of the customer-info sheet.
pub const LABEL_COL: usize = 0;
/// Value column of the customer-info sheet.
pub const VALUE_COL: usize = 1;

pub const SPID_LABEL: &str = "SPID";
pub const CLIENT_ID_LABEL: &str = "G-ID";
pub const ORDER_ID_LABEL: &str = "受注ID";
pub const FIRST_PERSON_LABEL: &str = "一人称";
pub const TARGET_AUDIENCE_LABEL: &str = "お客様ビジネスのターゲットは？";
pub const SERVICE_FEATURES_LABEL: &str = "お客様サービスの特徴";
pub const QUALIFICATIONS_LABEL: &str = "資格の有無";

// ---------------------------------------------------------------------------
// Keyword-info sheet — marker-driven row scan
// ---------------------------------------------------------------------------

/// A row whose first cell starts with this prefix begins a new content block.
pub const CONTENT_MARKER_PREFIX: &str = "コンテンツ";
/// A row whose kind cell contains this marker carries a needs keyword.
pub const NEEDS_KEYWORD_MARKER: &str = "ニーズKW";

/// Content key column on marker rows.
pub const CONTENT_NUMBER_COL: usize = 0;
/// Target keywords column on marker rows.
pub const TARGET_KEYWORDS_COL: usize = 2;
/// Kind column on needs rows.
pub const NEEDS_KIND_COL: usize = 1;
/// Keyword column on needs rows.
pub const NEEDS_KEYWORD_COL: usize = 2;
/// Headline-suggestion column on needs rows.
pub const NEEDS_HEADLINE_COL: usize = 3;

// ---------------------------------------------------------------------------
// Article-rules sheet
// ---------------------------------------------------------------------------

/// Topic key column of the rules sheet.
pub const RULE_KEY_COL: usize = 0;
/// Word-count hint column.
pub const RULE_WORD_COUNT_COL: usize = 1;
/// Keyword-usage rule column.
pub const RULE_KW_USAGE_COL: usize = 2;
/// Supplementary-notes column. Index 3 is a spacer in the source layout.
pub const RULE_POINTS_COL: usize = 4;
