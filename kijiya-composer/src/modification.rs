//! Modification-prompt dispatch — [`ModificationType`] and composition.
//!
//! The revision strategies form a closed, versioned set: adding one means
//! adding both a template to the modification library and a variant here.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;

use kijiya_core::types::CustomerProfile;

use crate::composer::PromptDocument;
use crate::engine::{compose, TemplateLibrary, Values};
use crate::error::ComposeError;

/// Target word-count range injected into the AI-expression rewrite prompt.
const SECTION_WORD_COUNT: &str = "800-900";
/// Fallback service name when the sheet left the first-person cell empty.
const SERVICE_NAME_FALLBACK: &str = "サービス名";

// ---------------------------------------------------------------------------
// ModificationType
// ---------------------------------------------------------------------------

/// All supported revision strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModificationType {
    AiExpressionElimination,
    ContentStrategyAdjustment,
    ServiceSpecificPositioning,
    QualityValidation,
}

impl ModificationType {
    /// All variants in a stable order.
    pub fn all() -> &'static [ModificationType] {
        &[
            ModificationType::AiExpressionElimination,
            ModificationType::ContentStrategyAdjustment,
            ModificationType::ServiceSpecificPositioning,
            ModificationType::QualityValidation,
        ]
    }

    /// Key of this strategy's template in the modification library — also
    /// the selector string accepted on the command line.
    pub fn template_name(&self) -> &'static str {
        match self {
            ModificationType::AiExpressionElimination => "ai_expression_elimination",
            ModificationType::ContentStrategyAdjustment => "content_strategy_adjustment",
            ModificationType::ServiceSpecificPositioning => "service_specific_positioning",
            ModificationType::QualityValidation => "quality_validation",
        }
    }

    /// Output document file name.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.template_name())
    }

    /// Human-readable strategy label used in the modification guide.
    pub fn label(&self) -> &'static str {
        match self {
            ModificationType::AiExpressionElimination => "AI表現排除・自然文化",
            ModificationType::ContentStrategyAdjustment => "コンテンツ戦略調整",
            ModificationType::ServiceSpecificPositioning => "サービス特化ポジショニング",
            ModificationType::QualityValidation => "品質検証・最終チェック",
        }
    }
}

impl fmt::Display for ModificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

impl FromStr for ModificationType {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModificationType::all()
            .iter()
            .copied()
            .find(|kind| kind.template_name() == s)
            .ok_or_else(|| ComposeError::UnknownModificationType {
                value: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// ModificationSelector
// ---------------------------------------------------------------------------

/// A single strategy, or every strategy at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationSelector {
    One(ModificationType),
    All,
}

impl ModificationSelector {
    /// The strategies this selector expands to, in declaration order.
    pub fn types(&self) -> Vec<ModificationType> {
        match self {
            ModificationSelector::One(kind) => vec![*kind],
            ModificationSelector::All => ModificationType::all().to_vec(),
        }
    }

    /// Guide label: the strategy label, or the comprehensive-revision label
    /// for `all`.
    pub fn label(&self) -> &'static str {
        match self {
            ModificationSelector::One(kind) => kind.label(),
            ModificationSelector::All => "包括的記事修正",
        }
    }
}

impl FromStr for ModificationSelector {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(ModificationSelector::All)
        } else {
            ModificationType::from_str(s).map(ModificationSelector::One)
        }
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose one modification prompt document per selected strategy.
///
/// A strategy whose template is absent from the library composes against the
/// empty body and yields an empty document rather than an error.
pub fn modification_documents(
    library: &TemplateLibrary,
    selector: ModificationSelector,
    article_content: &str,
    profile: &CustomerProfile,
) -> Vec<PromptDocument> {
    let service_name = if profile.first_person.is_empty() {
        SERVICE_NAME_FALLBACK
    } else {
        profile.first_person.as_str()
    };

    selector
        .types()
        .into_iter()
        .map(|kind| {
            let mut values = Values::new().with("article_content", article_content);
            match kind {
                ModificationType::AiExpressionElimination => {
                    values = values
                        .with("service_name", service_name)
                        .with("word_count", SECTION_WORD_COUNT);
                }
                ModificationType::ContentStrategyAdjustment
                | ModificationType::ServiceSpecificPositioning => {
                    values = values.with("service_name", service_name);
                }
                ModificationType::QualityValidation => {}
            }
            PromptDocument {
                name: kind.file_name(),
                body: compose(library, kind.template_name(), &values),
            }
        })
        .collect()
}

/// Compose the modification guide saved beside the `modification/` directory.
pub fn modification_guide(
    client_id: &str,
    content_number: &str,
    article_path: &Path,
    selector: ModificationSelector,
    generated_on: NaiveDate,
) -> String {
    let date = generated_on.format("%Y-%m-%d");
    let strategy = selector.label();
    let prompt_files = selector
        .types()
        .iter()
        .map(|kind| format!("- `{}`: {}", kind.file_name(), kind.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# 記事修正ガイド - {strategy}\n\
         \n\
         ## 修正対象記事\n\
         - **G-ID**: {client_id}\n\
         - **コンテンツ**: {content_number}\n\
         - **元記事**: {article}\n\
         - **修正タイプ**: {strategy}\n\
         \n\
         ## 修正プロセス\n\
         \n\
         ### ステップ1: 修正プロンプトの実行\n\
         {prompt_files}\n\
         \n\
         ### ステップ2: セクション別修正（大幅修正の場合）\n\
         1. 導入文の修正\n\
         2. 各セクションの個別修正\n\
         3. まとめセクションの修正\n\
         \n\
         ### ステップ3: 最終検証\n\
         修正後の記事に品質検証プロンプトを適用し、必要に応じて追加修正\n\
         \n\
         ## 重点チェックポイント\n\
         - 波線（～）とAIっぽい定型表現の排除\n\
         - 他社誘導表現の排除とサービス特徴の自然な訴求\n\
         - SEOキーワードの適切配置と文字数要件\n\
         \n\
         ---\n\
         \n\
         **修正日**: {date}\n\
         **対象**: {client_id} {content_number}\n",
        article = article_path.display(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
