//! Composition tests against an on-disk template store.

use std::path::Path;

use chrono::NaiveDate;
use kijiya_composer::{
    modification_documents, ModificationSelector, PromptComposer, TemplateLibrary,
    DEFAULT_SECTION_TEMPLATES,
};
use kijiya_core::types::{ClientId, ContentItem, ContentKey, CustomerProfile, KeywordNeed};
use tempfile::TempDir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date")
}

fn profile() -> CustomerProfile {
    CustomerProfile {
        client_id: ClientId::from("G0016169"),
        first_person: "ラクリア".to_owned(),
        target_audience: "中小企業の経理担当者".to_owned(),
        ..CustomerProfile::default()
    }
}

#[test]
fn library_loads_from_a_scaffolded_store() {
    let dir = TempDir::new().expect("tempdir");
    let store = dir.path().join("section_prompts.json");
    std::fs::write(&store, DEFAULT_SECTION_TEMPLATES).expect("write store");

    let library = TemplateLibrary::load(&store).expect("load");
    assert!(library.get("reference_url_collection").is_some());

    let composer = PromptComposer::new(&library);
    let item = ContentItem {
        content_number: ContentKey::from("コンテンツ1"),
        target_keywords: "経費精算 効率化".to_owned(),
        needs_keywords: vec![KeywordNeed {
            kind: "ニーズKW1".to_owned(),
            keyword: "経費精算 ツール".to_owned(),
            headline: "経費精算ツールの選び方".to_owned(),
        }],
    };
    let documents = composer.article_documents(&profile(), &item, "顧客プロンプト", date());
    assert_eq!(documents.len(), 8);
    assert!(documents[2].body.contains("経費精算ツールの選び方"));
}

#[test]
fn modification_dispatch_against_a_four_template_store() {
    let dir = TempDir::new().expect("tempdir");
    let store = dir.path().join("article_modification_prompts.json");
    std::fs::write(
        &store,
        r#"{
            "ai_expression_elimination": { "template": "A {article_content} {service_name} {word_count}" },
            "content_strategy_adjustment": { "template": "B {article_content} {service_name}" },
            "service_specific_positioning": { "template": "C {article_content} {service_name}" },
            "quality_validation": { "template": "D {article_content}" }
        }"#,
    )
    .expect("write store");

    let library = TemplateLibrary::load(&store).expect("load");
    let documents =
        modification_documents(&library, ModificationSelector::All, "記事本文", &profile());

    assert_eq!(documents.len(), 4);
    for document in &documents {
        assert!(document.body.contains("記事本文"));
    }
    assert_eq!(documents[0].body, "A 記事本文 ラクリア 800-900");
    assert_eq!(documents[3].body, "D 記事本文");
}

#[test]
fn unreadable_store_degrades_to_literal_placeholder_output() {
    let library = TemplateLibrary::load_or_empty(Path::new("/no/such/dir/store.json"));
    let documents = modification_documents(
        &library,
        ModificationSelector::All,
        "記事本文",
        &profile(),
    );
    assert_eq!(documents.len(), 4);
    assert!(documents.iter().all(|d| d.body.is_empty()));
}
