//! Domain types for the kijiya content plan.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + serde_json.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed client identifier — the "G-ID" of an order workbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ClientId(pub String);

impl ClientId {
    /// True when the workbook carried no client identifier at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed content-block key, e.g. `コンテンツ1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ContentKey(pub String);

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ContentKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Customer profile recovered from the customer-info sheet.
///
/// Every field except `client_id` falls back to the empty string when the
/// sheet does not carry the corresponding label — absence is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerProfile {
    pub spid: String,
    pub client_id: ClientId,
    pub order_id: String,
    /// Derived from `order_id`; see [`company_name_from_order`].
    pub company_name: String,
    /// The name/voice the generated text must speak as.
    pub first_person: String,
    pub target_audience: String,
    pub service_features: String,
    pub qualifications: String,
}

/// Derive the company name from an order id of the form `…_<company>`.
///
/// The last `_`-separated segment when the id contains an underscore, else
/// the empty string.
pub fn company_name_from_order(order_id: &str) -> String {
    if order_id.contains('_') {
        order_id.rsplit('_').next().unwrap_or("").to_owned()
    } else {
        String::new()
    }
}

/// A secondary keyword paired with a suggested section headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordNeed {
    /// Category label, e.g. `ニーズKW1`.
    pub kind: String,
    pub keyword: String,
    pub headline: String,
}

/// One planned article, identified by its content key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub content_number: ContentKey,
    pub target_keywords: String,
    /// Source row order; never reordered or deduplicated — it determines
    /// section ordering downstream.
    #[serde(default)]
    pub needs_keywords: Vec<KeywordNeed>,
}

impl ContentItem {
    /// File name for this item's keyword blob: the content key lowercased,
    /// whitespace runs collapsed to `_`.
    pub fn keyword_file_name(&self) -> String {
        let slug = self
            .content_number
            .0
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{slug}.json")
    }
}

/// Per-topic article rules from the optional rules sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArticleRule {
    pub word_count: String,
    pub kw_rules: String,
    pub points: String,
}

/// The normalized result of one workbook extraction.
///
/// `items` behaves as an insertion-ordered map keyed by `content_number`:
/// keys are unique, and order is the order of first appearance in the sheet.
/// The plan is created once per extraction and read-only afterwards — a
/// changed workbook re-runs extraction and replaces the plan wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPlan {
    pub profile: CustomerProfile,
    #[serde(default)]
    pub items: Vec<ContentItem>,
    #[serde(default)]
    pub rules: BTreeMap<String, ArticleRule>,
    pub source_file: PathBuf,
}

impl ContentPlan {
    /// Look up an item by its exact content key.
    pub fn item(&self, key: &ContentKey) -> Option<&ContentItem> {
        self.items.iter().find(|item| &item.content_number == key)
    }

    /// Look up an item by a CLI-supplied content number.
    ///
    /// Matches the first item (in plan order) whose key contains `number`
    /// as a substring or equals `コンテンツ<number>`.
    pub fn find_item(&self, number: &str) -> Option<&ContentItem> {
        let labelled = format!("コンテンツ{number}");
        self.items
            .iter()
            .find(|item| item.content_number.0.contains(number) || item.content_number.0 == labelled)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
