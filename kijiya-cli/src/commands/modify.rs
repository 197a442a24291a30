//! `kijiya modify` — compose modification prompts for an article draft.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;

use kijiya_composer::{modification_documents, modification_guide, ModificationSelector, TemplateLibrary};
use kijiya_core::{ClientId, SystemConfig, Workspace, WorkspaceError};

use super::resolve_root;

/// Arguments for `kijiya modify`.
#[derive(Args, Debug)]
pub struct ModifyArgs {
    /// Client identifier (G-ID).
    pub client_id: String,

    /// Content number, e.g. "1" or "コンテンツ1".
    pub content_number: String,

    /// Path to the drafted article to revise.
    pub article: PathBuf,

    /// Revision strategy, or `all` for every strategy.
    #[arg(long = "type", value_name = "TYPE", default_value = "ai_expression_elimination")]
    pub modification_type: String,

    /// System root directory (defaults to $KIJIYA_ROOT, then the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl ModifyArgs {
    pub fn run(self) -> Result<()> {
        let selector: ModificationSelector = self.modification_type.parse()?;
        if !self.article.exists() {
            bail!("article file not found: {}", self.article.display());
        }
        let article_content = fs::read_to_string(&self.article)
            .with_context(|| format!("failed to read '{}'", self.article.display()))?;

        let root = resolve_root(self.root);
        let config = SystemConfig::load(&root).context("failed to load system configuration")?;
        let workspace = Workspace::new(&config);
        let client = ClientId::from(self.client_id.as_str());

        let plan = workspace.load_plan(&client)?;
        if plan.find_item(&self.content_number).is_none() {
            return Err(WorkspaceError::MissingContentData {
                client: client.to_string(),
                content: self.content_number.clone(),
            }
            .into());
        }

        let library = TemplateLibrary::load_or_empty(&config.modification_templates);
        let documents =
            modification_documents(&library, selector, &article_content, &plan.profile);

        let modification_dir = workspace.modification_dir(&client, &self.content_number);
        println!(
            "{} {} modification prompts for '{}' content {}",
            "✓".green(),
            documents.len(),
            client,
            self.content_number
        );
        for document in &documents {
            let path =
                workspace.save_document(&modification_dir, &document.name, &document.body)?;
            println!("  ✎  {}", path.display());
        }

        let guide = modification_guide(
            &client.to_string(),
            &self.content_number,
            &self.article,
            selector,
            Utc::now().date_naive(),
        );
        let content_dir = workspace.content_dir(&client, &self.content_number);
        let guide_path = workspace.save_document(&content_dir, "modification_guide.md", &guide)?;
        println!("  ✎  {}", guide_path.display());
        Ok(())
    }
}
