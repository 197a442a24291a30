//! Template library and placeholder substitution.
//!
//! A template library is a JSON mapping from template name to a body with
//! `{token}` placeholders:
//!
//! ```json
//! { "summary_section": { "template": "…{company_name}…" } }
//! ```
//!
//! Substitution replaces the **first** occurrence of each supplied token and
//! leaves everything else untouched — a token appearing twice keeps its
//! second occurrence literal, and a token with no supplied value stays
//! literal in the output. Both behaviors are part of the composition
//! contract and are pinned by the tests below.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ComposeError;

/// Default article-creation template library, embedded at compile time.
pub const DEFAULT_SECTION_TEMPLATES: &str = include_str!("templates/section_prompts.json");
/// Default modification template library, embedded at compile time.
pub const DEFAULT_MODIFICATION_TEMPLATES: &str =
    include_str!("templates/article_modification_prompts.json");

#[derive(Debug, Deserialize)]
struct TemplateEntry {
    template: String,
}

// ---------------------------------------------------------------------------
// TemplateLibrary
// ---------------------------------------------------------------------------

/// Immutable name → body mapping, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: HashMap<String, String>,
}

impl TemplateLibrary {
    /// A library with no templates; every lookup composes against the empty
    /// body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a library from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, TemplateEntry> = serde_json::from_str(json)?;
        Ok(TemplateLibrary {
            templates: entries
                .into_iter()
                .map(|(name, entry)| (name, entry.template))
                .collect(),
        })
    }

    /// Load a library from a JSON file in the template store.
    pub fn load(path: &Path) -> Result<Self, ComposeError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ComposeError::TemplateLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents).map_err(|e| ComposeError::TemplateLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a library, degrading to an empty one when the store is
    /// unreadable. Downstream composition then yields literal-placeholder or
    /// empty documents instead of aborting the run.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(library) => library,
            Err(err) => {
                tracing::warn!("{err}; continuing with an empty template library");
                Self::empty()
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Body for `name`, or the empty body when the template is absent.
    pub fn body_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Ordered placeholder bindings for one composition call.
#[derive(Debug, Clone, Default)]
pub struct Values {
    pairs: Vec<(String, String)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: bind `{name}` to `value`.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.pairs.push((name.to_owned(), value.into()));
        self
    }
}

/// Replace the first occurrence of each supplied `{token}` in `body`.
///
/// Pure function: later occurrences of a token and tokens without a binding
/// are left as literal text.
pub fn substitute(body: &str, values: &Values) -> String {
    let mut output = body.to_owned();
    for (name, value) in &values.pairs {
        let token = format!("{{{name}}}");
        output = output.replacen(&token, value, 1);
    }
    output
}

/// Compose the named template against `values`; an absent template composes
/// against the empty body.
pub fn compose(library: &TemplateLibrary, name: &str, values: &Values) -> String {
    substitute(library.body_or_empty(name), values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
