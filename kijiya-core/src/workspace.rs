//! Per-client workspace repository.
//!
//! # Storage layout
//!
//! ```text
//! <customers>/<client-id>/
//!   customer_prompt.md
//!   content_plan.json
//!   keywords/<content-key>.json   (one blob per content item)
//!   references/
//! <output>/<client-id>/
//!   content_<number>/<document>.md
//!   content_<number>/modification/<type>.md
//! ```
//!
//! Writes go through an atomic `.tmp` sibling + rename; parent directories
//! are created on demand. Loads of absent client data fail with
//! [`WorkspaceError::MissingClientData`] — never with a partial result.

use std::path::{Path, PathBuf};

use crate::config::SystemConfig;
use crate::error::WorkspaceError;
use crate::types::{ClientId, ContentPlan};

/// File name of the persisted [`ContentPlan`].
const PLAN_FILE: &str = "content_plan.json";
/// File name of the customer-understanding prompt.
const CUSTOMER_PROMPT_FILE: &str = "customer_prompt.md";

/// Named-blob store for client plans and generated prompt documents.
#[derive(Debug, Clone)]
pub struct Workspace {
    customers_dir: PathBuf,
    output_dir: PathBuf,
}

impl Workspace {
    /// Construct a workspace over the configured customers/output roots.
    pub fn new(config: &SystemConfig) -> Self {
        Workspace {
            customers_dir: config.customers_dir.clone(),
            output_dir: config.output_dir.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Path helpers — pure, no I/O
    // -----------------------------------------------------------------------

    /// `<customers>/<client-id>/`
    pub fn client_dir(&self, client: &ClientId) -> PathBuf {
        self.customers_dir.join(&client.0)
    }

    /// `<customers>/<client-id>/keywords/`
    pub fn keywords_dir(&self, client: &ClientId) -> PathBuf {
        self.client_dir(client).join("keywords")
    }

    /// `<customers>/<client-id>/references/`
    pub fn references_dir(&self, client: &ClientId) -> PathBuf {
        self.client_dir(client).join("references")
    }

    /// `<output>/<client-id>/content_<number>/`
    pub fn content_dir(&self, client: &ClientId, number: &str) -> PathBuf {
        self.output_dir
            .join(&client.0)
            .join(format!("content_{number}"))
    }

    /// `<output>/<client-id>/content_<number>/modification/`
    pub fn modification_dir(&self, client: &ClientId, number: &str) -> PathBuf {
        self.content_dir(client, number).join("modification")
    }

    fn plan_path(&self, client: &ClientId) -> PathBuf {
        self.client_dir(client).join(PLAN_FILE)
    }

    fn customer_prompt_path(&self, client: &ClientId) -> PathBuf {
        self.client_dir(client).join(CUSTOMER_PROMPT_FILE)
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Create the per-client directory skeleton. Idempotent.
    pub fn ensure_client_layout(&self, client: &ClientId) -> Result<PathBuf, WorkspaceError> {
        let client_dir = self.client_dir(client);
        std::fs::create_dir_all(&client_dir)?;
        std::fs::create_dir_all(self.keywords_dir(client))?;
        std::fs::create_dir_all(self.references_dir(client))?;
        std::fs::create_dir_all(self.output_dir.join(&client.0))?;
        Ok(client_dir)
    }

    // -----------------------------------------------------------------------
    // Content plan
    // -----------------------------------------------------------------------

    /// Atomically persist the plan under its client directory.
    pub fn save_plan(&self, plan: &ContentPlan) -> Result<PathBuf, WorkspaceError> {
        let path = self.plan_path(&plan.profile.client_id);
        let json = serde_json::to_string_pretty(plan)?;
        atomic_write(&path, &json)?;
        Ok(path)
    }

    /// Load the persisted plan for `client`.
    ///
    /// Returns [`WorkspaceError::MissingClientData`] when the client was
    /// never set up, [`WorkspaceError::Parse`] (with path context) when the
    /// stored blob is malformed.
    pub fn load_plan(&self, client: &ClientId) -> Result<ContentPlan, WorkspaceError> {
        let path = self.plan_path(client);
        if !path.exists() {
            return Err(WorkspaceError::MissingClientData {
                client: client.to_string(),
            });
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|e| WorkspaceError::Parse { path, source: e })
    }

    /// Write one keyword blob per content item under `keywords/`.
    pub fn save_keyword_files(&self, plan: &ContentPlan) -> Result<Vec<PathBuf>, WorkspaceError> {
        let dir = self.keywords_dir(&plan.profile.client_id);
        let mut written = Vec::with_capacity(plan.items.len());
        for item in &plan.items {
            let path = dir.join(item.keyword_file_name());
            let json = serde_json::to_string_pretty(item)?;
            atomic_write(&path, &json)?;
            written.push(path);
        }
        Ok(written)
    }

    // -----------------------------------------------------------------------
    // Customer prompt
    // -----------------------------------------------------------------------

    /// Atomically persist the customer-understanding prompt.
    pub fn save_customer_prompt(
        &self,
        client: &ClientId,
        text: &str,
    ) -> Result<PathBuf, WorkspaceError> {
        let path = self.customer_prompt_path(client);
        atomic_write(&path, text)?;
        Ok(path)
    }

    /// Load the stored customer prompt; `None` when never written.
    pub fn load_customer_prompt(
        &self,
        client: &ClientId,
    ) -> Result<Option<String>, WorkspaceError> {
        let path = self.customer_prompt_path(client);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    // -----------------------------------------------------------------------
    // Prompt documents
    // -----------------------------------------------------------------------

    /// Atomically write one named document into `dir`.
    pub fn save_document(
        &self,
        dir: &Path,
        name: &str,
        body: &str,
    ) -> Result<PathBuf, WorkspaceError> {
        let path = dir.join(name);
        atomic_write(&path, body)?;
        Ok(path)
    }

    /// List the documents under `dir`, sorted by path. An absent directory
    /// yields an empty list.
    pub fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>, WorkspaceError> {
        if !dir.exists() {
            return Ok(vec![]);
        }
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect();
        paths.sort();
        Ok(paths)
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Write flow: ensure parent → `<path>.tmp` sibling → `rename`.
/// The `.tmp` lives in the target directory (same filesystem — no EXDEV).
fn atomic_write(path: &Path, contents: &str) -> Result<(), WorkspaceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = PathBuf::from(format!("{}.tmp", path.display()));
    std::fs::write(&tmp, contents)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
