//! End-to-end extraction tests against real workbook files.

use std::path::{Path, PathBuf};

use kijiya_core::{ClientId, ContentKey, SheetNames};
use kijiya_extractor::{extract_plan, ExtractError};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

fn write_sheet(
    workbook: &mut Workbook,
    name: &str,
    rows: &[Vec<&str>],
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(row_idx as u32, col_idx as u16, *value)?;
        }
    }
    Ok(())
}

fn order_workbook(dir: &Path, include_rules: bool) -> PathBuf {
    let mut workbook = Workbook::new();

    write_sheet(
        &mut workbook,
        "共有事項",
        &[
            vec!["SPID", "SP-001"],
            vec!["G-ID", "G0016169"],
            vec!["受注ID", "2024_0012_アクメ商事"],
            vec!["一人称", "ラクリア"],
            vec!["お客様ビジネスのターゲットは？", "中小企業の経理担当者"],
            vec!["お客様サービスの特徴", "AIとプロ人材の融合"],
            vec!["資格の有無", "なし"],
        ],
    )
    .expect("customer sheet");

    write_sheet(
        &mut workbook,
        "KW情報",
        &[
            vec!["コンテンツ1", "", "経費精算 効率化"],
            vec!["", "ニーズKW1", "経費精算 ツール", "経費精算ツールの選び方"],
            vec!["", "ニーズKW2", "経費精算 フロー", "経費精算フローの整え方"],
            vec!["コンテンツ2", "", "請求書 電子化"],
        ],
    )
    .expect("keyword sheet");

    if include_rules {
        write_sheet(
            &mut workbook,
            "記事ルール",
            &[vec!["経費精算", "3000", "全見出しに配置", "", "比較表を含める"]],
        )
        .expect("rules sheet");
    }

    let path = dir.join("発注書.xlsx");
    workbook.save(&path).expect("save workbook");
    path
}

// ---------------------------------------------------------------------------
// Cases
// ---------------------------------------------------------------------------

#[test]
fn extract_plan_recovers_profile_items_and_rules() {
    let dir = TempDir::new().expect("tempdir");
    let path = order_workbook(dir.path(), true);

    let plan = extract_plan(&path, &SheetNames::default()).expect("extract");

    assert_eq!(plan.profile.client_id, ClientId::from("G0016169"));
    assert_eq!(plan.profile.company_name, "アクメ商事");
    assert_eq!(plan.profile.first_person, "ラクリア");

    assert_eq!(plan.items.len(), 2);
    let first = plan.item(&ContentKey::from("コンテンツ1")).expect("item 1");
    assert_eq!(first.target_keywords, "経費精算 効率化");
    assert_eq!(first.needs_keywords.len(), 2);
    assert_eq!(first.needs_keywords[0].headline, "経費精算ツールの選び方");
    let second = plan.item(&ContentKey::from("コンテンツ2")).expect("item 2");
    assert!(second.needs_keywords.is_empty());

    assert_eq!(plan.rules["経費精算"].points, "比較表を含める");
    assert_eq!(plan.source_file, path);
}

#[test]
fn extraction_is_idempotent_byte_for_byte() {
    let dir = TempDir::new().expect("tempdir");
    let path = order_workbook(dir.path(), true);

    let first = extract_plan(&path, &SheetNames::default()).expect("extract");
    let second = extract_plan(&path, &SheetNames::default()).expect("extract");

    let first_json = serde_json::to_string_pretty(&first).expect("serialize");
    let second_json = serde_json::to_string_pretty(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn missing_rules_sheet_yields_empty_rules() {
    let dir = TempDir::new().expect("tempdir");
    let path = order_workbook(dir.path(), false);

    let plan = extract_plan(&path, &SheetNames::default()).expect("extract");
    assert!(plan.rules.is_empty());
}

#[test]
fn missing_keyword_sheet_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, "共有事項", &[vec!["G-ID", "G1"]]).expect("sheet");
    let path = dir.path().join("partial.xlsx");
    workbook.save(&path).expect("save");

    let err = extract_plan(&path, &SheetNames::default()).unwrap_err();
    match err {
        ExtractError::MissingSheet { name } => assert_eq!(name, "KW情報"),
        other => panic!("expected MissingSheet, got {other:?}"),
    }
}

#[test]
fn configured_sheet_names_are_honoured() {
    let dir = TempDir::new().expect("tempdir");
    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, "client", &[vec!["G-ID", "G1"]]).expect("sheet");
    write_sheet(&mut workbook, "keywords", &[vec!["コンテンツ1", "", "kw"]]).expect("sheet");
    let path = dir.path().join("renamed.xlsx");
    workbook.save(&path).expect("save");

    let sheets = SheetNames {
        customer_info: "client".to_owned(),
        keyword_info: "keywords".to_owned(),
        article_rules: "rules".to_owned(),
    };
    let plan = extract_plan(&path, &sheets).expect("extract");
    assert_eq!(plan.profile.client_id, ClientId::from("G1"));
    assert_eq!(plan.items.len(), 1);
}
