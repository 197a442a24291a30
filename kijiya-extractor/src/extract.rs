//! Row scans over the order workbook sheets.
//!
//! All three scans are pure functions over a [`SheetGrid`]; file handling
//! lives in [`crate::sheet`] and the [`crate::extract_plan`] entry point.

use std::collections::BTreeMap;

use kijiya_core::types::{
    company_name_from_order, ArticleRule, ClientId, ContentItem, ContentKey, CustomerProfile,
    KeywordNeed,
};

use crate::schema;
use crate::sheet::SheetGrid;

// ---------------------------------------------------------------------------
// Customer info — key–value scan
// ---------------------------------------------------------------------------

/// Extract the customer profile from the customer-info sheet.
///
/// For each recognized label the value is the second cell of the first row
/// whose first cell equals the label exactly; no match yields an empty
/// string. The company name derives from the order id.
pub fn extract_customer_info(grid: &SheetGrid) -> CustomerProfile {
    let order_id = find_value(grid, schema::ORDER_ID_LABEL);
    CustomerProfile {
        spid: find_value(grid, schema::SPID_LABEL),
        client_id: ClientId::from(find_value(grid, schema::CLIENT_ID_LABEL)),
        company_name: company_name_from_order(&order_id),
        order_id,
        first_person: find_value(grid, schema::FIRST_PERSON_LABEL),
        target_audience: find_value(grid, schema::TARGET_AUDIENCE_LABEL),
        service_features: find_value(grid, schema::SERVICE_FEATURES_LABEL),
        qualifications: find_value(grid, schema::QUALIFICATIONS_LABEL),
    }
}

fn find_value(grid: &SheetGrid, label: &str) -> String {
    grid.rows
        .iter()
        .find(|row| cell(row, schema::LABEL_COL) == label)
        .map(|row| cell(row, schema::VALUE_COL).to_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Keyword info — marker-driven row scan
// ---------------------------------------------------------------------------

/// Extract the ordered content items from the keyword-info sheet.
///
/// A row whose first cell starts with the content marker begins a new item;
/// while an item is active, a row whose kind cell contains the needs marker
/// appends a [`KeywordNeed`]. A repeated content key replaces the earlier
/// item in place, keeping its first-appearance position. Blank rows and all
/// other rows are skipped without a state change.
pub fn extract_keyword_info(grid: &SheetGrid) -> Vec<ContentItem> {
    let mut items: Vec<ContentItem> = Vec::new();
    let mut current: Option<usize> = None;

    for row in &grid.rows {
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }

        let first = cell(row, schema::CONTENT_NUMBER_COL);
        if first.starts_with(schema::CONTENT_MARKER_PREFIX) {
            let item = ContentItem {
                content_number: ContentKey::from(first),
                target_keywords: cell(row, schema::TARGET_KEYWORDS_COL).to_owned(),
                needs_keywords: Vec::new(),
            };
            current = Some(upsert(&mut items, item));
            continue;
        }

        let Some(active) = current else { continue };
        let kind = cell(row, schema::NEEDS_KIND_COL);
        if kind.contains(schema::NEEDS_KEYWORD_MARKER) {
            items[active].needs_keywords.push(KeywordNeed {
                kind: kind.to_owned(),
                keyword: cell(row, schema::NEEDS_KEYWORD_COL).to_owned(),
                headline: cell(row, schema::NEEDS_HEADLINE_COL).to_owned(),
            });
        }
    }

    items
}

/// Insert `item` keyed by its content number: replace in place when the key
/// already exists, append otherwise. Returns the item's index.
fn upsert(items: &mut Vec<ContentItem>, item: ContentItem) -> usize {
    match items
        .iter()
        .position(|existing| existing.content_number == item.content_number)
    {
        Some(index) => {
            items[index] = item;
            index
        }
        None => {
            items.push(item);
            items.len() - 1
        }
    }
}

// ---------------------------------------------------------------------------
// Article rules — linear scan
// ---------------------------------------------------------------------------

/// Extract the per-topic rules mapping. Rows without a key cell are skipped.
pub fn extract_article_rules(grid: &SheetGrid) -> BTreeMap<String, ArticleRule> {
    let mut rules = BTreeMap::new();
    for row in &grid.rows {
        let key = cell(row, schema::RULE_KEY_COL);
        if key.is_empty() {
            continue;
        }
        rules.insert(
            key.to_owned(),
            ArticleRule {
                word_count: cell(row, schema::RULE_WORD_COUNT_COL).to_owned(),
                kw_rules: cell(row, schema::RULE_KW_USAGE_COL).to_owned(),
                points: cell(row, schema::RULE_POINTS_COL).to_owned(),
            },
        );
    }
    rules
}

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(String::as_str).unwrap_or("")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_scan_reads_labelled_values() {
        let grid = SheetGrid::from_rows([
            vec!["共有事項", ""],
            vec!["SPID", "SP-001"],
            vec!["G-ID", "G0016169"],
            vec!["受注ID", "2024_0012_アクメ商事"],
            vec!["一人称", "ラクリア"],
            vec!["お客様ビジネスのターゲットは？", "中小企業の経理担当者"],
            vec!["お客様サービスの特徴", "AIとプロ人材の融合"],
            vec!["資格の有無", "なし"],
        ]);
        let profile = extract_customer_info(&grid);
        assert_eq!(profile.spid, "SP-001");
        assert_eq!(profile.client_id, ClientId::from("G0016169"));
        assert_eq!(profile.order_id, "2024_0012_アクメ商事");
        assert_eq!(profile.company_name, "アクメ商事");
        assert_eq!(profile.first_person, "ラクリア");
        assert_eq!(profile.target_audience, "中小企業の経理担当者");
        assert_eq!(profile.service_features, "AIとプロ人材の融合");
        assert_eq!(profile.qualifications, "なし");
    }

    #[test]
    fn customer_scan_missing_labels_yield_empty_fields() {
        let grid = SheetGrid::from_rows([vec!["G-ID", "G1"]]);
        let profile = extract_customer_info(&grid);
        assert_eq!(profile.client_id, ClientId::from("G1"));
        assert_eq!(profile.spid, "");
        assert_eq!(profile.order_id, "");
        assert_eq!(profile.company_name, "");
    }

    #[test]
    fn customer_scan_takes_first_label_match() {
        let grid = SheetGrid::from_rows([
            vec!["G-ID", "G-first"],
            vec!["G-ID", "G-second"],
        ]);
        assert_eq!(
            extract_customer_info(&grid).client_id,
            ClientId::from("G-first")
        );
    }

    #[test]
    fn customer_scan_requires_exact_label() {
        let grid = SheetGrid::from_rows([vec!["G-ID (必須)", "G1"]]);
        assert!(extract_customer_info(&grid).client_id.is_empty());
    }

    // The three-row scenario from the extraction contract: two markers, one
    // needs row between them.
    #[test]
    fn keyword_scan_end_to_end_scenario() {
        let grid = SheetGrid::from_rows([
            vec!["コンテンツ1", "", "経費精算 効率化"],
            vec!["", "ニーズKW1", "経費精算 ツール", "経費精算ツールの選び方"],
            vec!["コンテンツ2", "", "請求書 電子化"],
        ]);
        let items = extract_keyword_info(&grid);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].content_number, ContentKey::from("コンテンツ1"));
        assert_eq!(items[0].target_keywords, "経費精算 効率化");
        assert_eq!(
            items[0].needs_keywords,
            vec![KeywordNeed {
                kind: "ニーズKW1".to_owned(),
                keyword: "経費精算 ツール".to_owned(),
                headline: "経費精算ツールの選び方".to_owned(),
            }]
        );

        assert_eq!(items[1].content_number, ContentKey::from("コンテンツ2"));
        assert_eq!(items[1].target_keywords, "請求書 電子化");
        assert!(items[1].needs_keywords.is_empty());
    }

    #[test]
    fn keyword_scan_counts_needs_between_markers() {
        let grid = SheetGrid::from_rows([
            vec!["コンテンツ1", "", "a"],
            vec!["", "ニーズKW1", "k1", "h1"],
            vec!["", "ニーズKW2", "k2", "h2"],
            vec!["", "ニーズKW3", "k3", "h3"],
            vec!["コンテンツ2", "", "b"],
            vec!["", "ニーズKW1", "k4", "h4"],
        ]);
        let items = extract_keyword_info(&grid);
        assert_eq!(items[0].needs_keywords.len(), 3);
        assert_eq!(items[1].needs_keywords.len(), 1);
        // Source row order, untouched.
        let keywords: Vec<&str> = items[0]
            .needs_keywords
            .iter()
            .map(|need| need.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["k1", "k2", "k3"]);
    }

    #[test]
    fn keyword_scan_ignores_rows_before_the_first_marker() {
        let grid = SheetGrid::from_rows([
            vec!["", "ニーズKW1", "stray", "stray headline"],
            vec!["コンテンツ1", "", "a"],
        ]);
        let items = extract_keyword_info(&grid);
        assert_eq!(items.len(), 1);
        assert!(items[0].needs_keywords.is_empty());
    }

    #[test]
    fn keyword_scan_skips_blank_and_unmarked_rows_without_state_change() {
        let grid = SheetGrid::from_rows([
            vec!["コンテンツ1", "", "a"],
            vec![],
            vec!["", "", ""],
            vec!["備考", "メモ", "x"],
            vec!["", "ニーズKW1", "k1", "h1"],
        ]);
        let items = extract_keyword_info(&grid);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].needs_keywords.len(), 1);
    }

    #[test]
    fn keyword_scan_duplicate_marker_overwrites_in_place() {
        let grid = SheetGrid::from_rows([
            vec!["コンテンツ1", "", "old"],
            vec!["", "ニーズKW1", "k-old", "h-old"],
            vec!["コンテンツ2", "", "two"],
            vec!["コンテンツ1", "", "new"],
            vec!["", "ニーズKW1", "k-new", "h-new"],
        ]);
        let items = extract_keyword_info(&grid);
        assert_eq!(items.len(), 2);
        // Replacement keeps the first-appearance position.
        assert_eq!(items[0].content_number, ContentKey::from("コンテンツ1"));
        assert_eq!(items[0].target_keywords, "new");
        assert_eq!(items[0].needs_keywords.len(), 1);
        assert_eq!(items[0].needs_keywords[0].keyword, "k-new");
        assert_eq!(items[1].content_number, ContentKey::from("コンテンツ2"));
    }

    #[test]
    fn keyword_scan_missing_cells_default_to_empty() {
        let grid = SheetGrid::from_rows([
            vec!["コンテンツ1"],
            vec!["", "ニーズKW1"],
        ]);
        let items = extract_keyword_info(&grid);
        assert_eq!(items[0].target_keywords, "");
        assert_eq!(items[0].needs_keywords[0].keyword, "");
        assert_eq!(items[0].needs_keywords[0].headline, "");
    }

    #[test]
    fn rules_scan_reads_designated_columns() {
        let grid = SheetGrid::from_rows([
            vec!["経費精算", "3000", "全見出しに配置", "spacer", "比較表を含める"],
            vec!["", "ignored"],
            vec!["請求書", "2500", "", "", ""],
        ]);
        let rules = extract_article_rules(&grid);
        assert_eq!(rules.len(), 2);
        let rule = &rules["経費精算"];
        assert_eq!(rule.word_count, "3000");
        assert_eq!(rule.kw_rules, "全見出しに配置");
        // The notes column sits at index 4, not 3.
        assert_eq!(rule.points, "比較表を含める");
        assert_eq!(rules["請求書"].word_count, "2500");
    }
}
