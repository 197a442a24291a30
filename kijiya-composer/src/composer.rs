//! Article prompt composition — the per-content document set.
//!
//! # Document set (fixed order = external numbering)
//!
//! | #     | Document                    | Template                   |
//! |-------|-----------------------------|----------------------------|
//! | 1     | `reference_collection.md`   | `reference_url_collection` |
//! | 2     | `customer_understanding.md` | — (customer prompt verbatim) |
//! | 3…2+N | `section_<i>.md`            | `section_creation`         |
//! | 3+N   | `summary_section.md`        | `summary_section`          |
//! | 4+N   | `introduction.md`           | `introduction`             |
//! | 5+N   | `title_generation.md`       | `title_generation`         |
//! | 6+N   | `meta_description.md`       | `meta_description`         |
//! | 7+N   | `article_creation_guide.md` | — (composed guide)         |
//!
//! N = number of needs keywords on the content item. Composition is pure:
//! the generation date is injected by the caller, never read from the clock
//! here.

use chrono::NaiveDate;

use kijiya_core::types::{ContentItem, CustomerProfile, KeywordNeed};

use crate::engine::{compose, TemplateLibrary, Values};

/// Section-library template names.
const REFERENCE_TEMPLATE: &str = "reference_url_collection";
const SECTION_TEMPLATE: &str = "section_creation";
const SUMMARY_TEMPLATE: &str = "summary_section";
const INTRODUCTION_TEMPLATE: &str = "introduction";
const TITLE_TEMPLATE: &str = "title_generation";
const META_DESCRIPTION_TEMPLATE: &str = "meta_description";

/// Fallback company label when the order sheet left the field empty.
const COMPANY_FALLBACK: &str = "企業名未設定";
/// Fallback service label when the order sheet left the field empty.
const SERVICE_FALLBACK: &str = "サービス名未設定";

/// One unit of generated output text, immutable once composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    pub name: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// PromptComposer
// ---------------------------------------------------------------------------

/// Composes the article-creation document set from the section library.
pub struct PromptComposer<'a> {
    templates: &'a TemplateLibrary,
}

impl<'a> PromptComposer<'a> {
    pub fn new(templates: &'a TemplateLibrary) -> Self {
        PromptComposer { templates }
    }

    /// Produce the full ordered document set for one content item — 7+N
    /// documents where N is the needs-keyword count.
    pub fn article_documents(
        &self,
        profile: &CustomerProfile,
        item: &ContentItem,
        customer_prompt: &str,
        generated_on: NaiveDate,
    ) -> Vec<PromptDocument> {
        let mut documents = Vec::with_capacity(item.needs_keywords.len() + 7);

        documents.push(PromptDocument {
            name: "reference_collection.md".to_owned(),
            body: self.reference_collection(item),
        });
        documents.push(PromptDocument {
            name: "customer_understanding.md".to_owned(),
            body: customer_prompt.to_owned(),
        });
        for (index, need) in item.needs_keywords.iter().enumerate() {
            documents.push(PromptDocument {
                name: format!("section_{}.md", index + 1),
                body: self.section(need, profile, customer_prompt, index + 1),
            });
        }
        documents.push(PromptDocument {
            name: "summary_section.md".to_owned(),
            body: self.summary(profile),
        });
        documents.push(PromptDocument {
            name: "introduction.md".to_owned(),
            body: self.templates.body_or_empty(INTRODUCTION_TEMPLATE).to_owned(),
        });
        documents.push(PromptDocument {
            name: "title_generation.md".to_owned(),
            body: self.templates.body_or_empty(TITLE_TEMPLATE).to_owned(),
        });
        documents.push(PromptDocument {
            name: "meta_description.md".to_owned(),
            body: self.templates.body_or_empty(META_DESCRIPTION_TEMPLATE).to_owned(),
        });
        documents.push(PromptDocument {
            name: "article_creation_guide.md".to_owned(),
            body: creation_guide(profile, item, generated_on),
        });

        documents
    }

    fn reference_collection(&self, item: &ContentItem) -> String {
        let needs = item
            .needs_keywords
            .iter()
            .map(|need| format!("{}: {}", need.kind, need.keyword))
            .collect::<Vec<_>>()
            .join("\n");
        let values = Values::new()
            .with(
                "target_keywords",
                format!("ターゲットKW: {}", item.target_keywords),
            )
            .with("needs_keywords", needs);
        compose(self.templates, REFERENCE_TEMPLATE, &values)
    }

    fn section(
        &self,
        need: &KeywordNeed,
        profile: &CustomerProfile,
        customer_prompt: &str,
        ordinal: usize,
    ) -> String {
        // Headline suggestion wins; the raw keyword is the fallback title.
        let title = if need.headline.is_empty() {
            need.keyword.as_str()
        } else {
            need.headline.as_str()
        };
        let values = Values::new()
            .with("section_title", title)
            .with("keyword", need.keyword.as_str())
            .with("target_audience", profile.target_audience.as_str())
            .with("customer_prompt", customer_prompt);
        format!(
            "# セクション{}: {}\n\n{}",
            ordinal,
            need.kind,
            compose(self.templates, SECTION_TEMPLATE, &values)
        )
    }

    fn summary(&self, profile: &CustomerProfile) -> String {
        let company = if profile.first_person.is_empty() {
            "サービス名"
        } else {
            profile.first_person.as_str()
        };
        let values = Values::new().with("company_name", company);
        compose(self.templates, SUMMARY_TEMPLATE, &values)
    }
}

// ---------------------------------------------------------------------------
// Composed documents without templates
// ---------------------------------------------------------------------------

/// Compose the customer-understanding prompt from the profile.
///
/// The date is injected so the function stays deterministic under test.
pub fn customer_prompt(profile: &CustomerProfile, generated_on: NaiveDate) -> String {
    let company = fallback(&profile.company_name, COMPANY_FALLBACK);
    let service = fallback(&profile.first_person, SERVICE_FALLBACK);
    let date = generated_on.format("%Y-%m-%d");

    format!(
        "# {company} - 顧客理解プロンプト\n\
         \n\
         **G-ID**: {gid}  \n\
         **企業名**: {company}  \n\
         **サービス**: {service}  \n\
         **一人称**: {first_person}\n\
         \n\
         ## 企業概要\n\
         \n\
         ### ターゲット顧客\n\
         {target}\n\
         \n\
         ### サービス特徴\n\
         {features}\n\
         \n\
         ## 記事作成時の重要ポイント\n\
         \n\
         ### 1. 課題への共感\n\
         ターゲット顧客の課題に寄り添った内容作成\n\
         \n\
         ### 2. サービス価値訴求\n\
         {service}の特徴を自然に織り込み\n\
         \n\
         ### 3. 実用性の強調\n\
         すぐに使える実装レベルの情報提供\n\
         \n\
         ### 4. 自社誘導の自然な表現\n\
         競合他社への誘導を避けた自然な誘導\n\
         \n\
         ## 文章トーン\n\
         \n\
         ### 基調\n\
         - **専門的かつ親しみやすい**\n\
         - **課題解決志向**\n\
         - **実用性重視**\n\
         \n\
         ### 避けるべきトーン\n\
         - 押し売り感のある表現\n\
         - 過度に技術的すぎる説明\n\
         - 他社を批判するような比較表現\n\
         \n\
         ---\n\
         \n\
         **作成日**: {date}  \n\
         **対象**: {gid} {company}  \n\
         **サービス**: {service}\n",
        gid = profile.client_id,
        first_person = profile.first_person,
        target = profile.target_audience,
        features = profile.service_features,
    )
}

/// Compose the step-by-step creation guide shipped with the document set.
fn creation_guide(
    profile: &CustomerProfile,
    item: &ContentItem,
    generated_on: NaiveDate,
) -> String {
    let company = fallback(&profile.company_name, COMPANY_FALLBACK);
    let service = fallback(&profile.first_person, SERVICE_FALLBACK);
    let date = generated_on.format("%Y-%m-%d");

    let needs_list = item
        .needs_keywords
        .iter()
        .map(|need| format!("- {}: {} (見出し案: {})", need.kind, need.keyword, need.headline))
        .collect::<Vec<_>>()
        .join("\n");
    let section_files = item
        .needs_keywords
        .iter()
        .enumerate()
        .map(|(index, need)| format!("- `section_{}.md`: {}", index + 1, need.headline))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# {company} - {content} 記事作成ガイド\n\
         \n\
         ## 記事概要\n\
         - **G-ID**: {gid}\n\
         - **企業名**: {company}\n\
         - **サービス**: {service}\n\
         - **コンテンツ番号**: {content}\n\
         \n\
         ## キーワード情報\n\
         ### ターゲットキーワード（必須使用）\n\
         {target_keywords}\n\
         \n\
         ### ニーズキーワード\n\
         {needs_list}\n\
         \n\
         ## 記事作成手順\n\
         \n\
         ### ステップ1: 参考URL収集\n\
         `reference_collection.md` のプロンプトを実行して、参考記事を3-6個収集\n\
         \n\
         ### ステップ2: 顧客理解\n\
         `customer_understanding.md` で企業・サービス理解を深める\n\
         \n\
         ### ステップ3以降: セクション作成\n\
         各セクションプロンプトを順次実行:\n\
         {section_files}\n\
         \n\
         ### まとめ・導入\n\
         `summary_section.md` でまとめを、`introduction.md` で導入文を作成\n\
         \n\
         ### タイトル・メタ情報\n\
         - `title_generation.md`: 5パターンのタイトル生成\n\
         - `meta_description.md`: メタディスクリプション作成\n\
         \n\
         ## 品質基準\n\
         - **本文**: 3,000文字以上（タイトル・メタ除く）\n\
         - **タイトル**: 35文字以内\n\
         - **メタディスクリプション**: 90-120文字\n\
         - **セクション**: 各800-900文字\n\
         - AI感の排除と{service}への自然な誘導\n\
         \n\
         ---\n\
         \n\
         **作成日**: {date}  \n\
         **G-ID**: {gid}  \n\
         **コンテンツ**: {content}\n",
        gid = profile.client_id,
        content = item.content_number,
        target_keywords = item.target_keywords,
    )
}

fn fallback<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
