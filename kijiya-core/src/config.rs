//! System configuration — explicit roots, sheet names, template locations.
//!
//! Nothing in the core bakes in a default project root: the caller resolves
//! a root directory, builds a [`SystemConfig`] from it, and passes the
//! config to each component at construction. An optional `<root>/kijiya.yaml`
//! overrides individual defaults.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// Workbook sheet names the extractor addresses.
///
/// The defaults match the order-sheet layout the system was built for; a
/// differently labelled workbook only needs a `kijiya.yaml` override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    /// Required key–value sheet with the customer profile.
    pub customer_info: String,
    /// Required sheet with content markers and needs-keyword rows.
    pub keyword_info: String,
    /// Optional per-topic article-rules sheet.
    pub article_rules: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        SheetNames {
            customer_info: "共有事項".to_owned(),
            keyword_info: "KW情報".to_owned(),
            article_rules: "記事ルール".to_owned(),
        }
    }
}

/// Fully resolved system configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// System root every other path is resolved against.
    pub root: PathBuf,
    /// Per-client input data: `<customers>/<client-id>/…`.
    pub customers_dir: PathBuf,
    /// Generated prompt documents: `<output>/<client-id>/content_<n>/…`.
    pub output_dir: PathBuf,
    /// JSON library of article-creation templates.
    pub section_templates: PathBuf,
    /// JSON library of modification templates.
    pub modification_templates: PathBuf,
    pub sheets: SheetNames,
}

impl SystemConfig {
    /// Default configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let templates = root.join("config").join("templates");
        SystemConfig {
            customers_dir: root.join("customers"),
            output_dir: root.join("output"),
            section_templates: templates.join("section_prompts.json"),
            modification_templates: templates.join("article_modification_prompts.json"),
            sheets: SheetNames::default(),
            root,
        }
    }

    /// Load the configuration for `root`, overlaying `<root>/kijiya.yaml`
    /// when it exists. Relative paths in the file resolve against `root`.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::with_root(root);
        let path = config.root.join("kijiya.yaml");
        if !path.exists() {
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&path)?;
        let overlay: ConfigFile =
            serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })?;

        if let Some(dir) = overlay.customers_dir {
            config.customers_dir = config.root.join(dir);
        }
        if let Some(dir) = overlay.output_dir {
            config.output_dir = config.root.join(dir);
        }
        if let Some(file) = overlay.section_templates {
            config.section_templates = config.root.join(file);
        }
        if let Some(file) = overlay.modification_templates {
            config.modification_templates = config.root.join(file);
        }
        if let Some(sheets) = overlay.sheets {
            if let Some(name) = sheets.customer_info {
                config.sheets.customer_info = name;
            }
            if let Some(name) = sheets.keyword_info {
                config.sheets.keyword_info = name;
            }
            if let Some(name) = sheets.article_rules {
                config.sheets.article_rules = name;
            }
        }
        Ok(config)
    }
}

/// On-disk shape of `kijiya.yaml` — every field optional.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    customers_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    section_templates: Option<PathBuf>,
    modification_templates: Option<PathBuf>,
    sheets: Option<SheetNamesFile>,
}

#[derive(Debug, Deserialize, Default)]
struct SheetNamesFile {
    customer_info: Option<String>,
    keyword_info: Option<String>,
    article_rules: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
