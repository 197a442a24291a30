//! `kijiya create <client-id> <content-number>` — compose the article prompt set.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;

use kijiya_composer::{PromptComposer, TemplateLibrary};
use kijiya_core::{ClientId, SystemConfig, Workspace, WorkspaceError};

use super::resolve_root;

/// Arguments for `kijiya create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Client identifier (G-ID).
    pub client_id: String,

    /// Content number, e.g. "1" or "コンテンツ1".
    pub content_number: String,

    /// System root directory (defaults to $KIJIYA_ROOT, then the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl CreateArgs {
    pub fn run(self) -> Result<()> {
        let root = resolve_root(self.root);
        let config = SystemConfig::load(&root).context("failed to load system configuration")?;
        let workspace = Workspace::new(&config);
        let client = ClientId::from(self.client_id.as_str());

        let plan = workspace.load_plan(&client)?;
        let item = plan
            .find_item(&self.content_number)
            .ok_or_else(|| WorkspaceError::MissingContentData {
                client: client.to_string(),
                content: self.content_number.clone(),
            })?;

        let customer = workspace.load_customer_prompt(&client)?.unwrap_or_default();
        let library = TemplateLibrary::load_or_empty(&config.section_templates);
        let composer = PromptComposer::new(&library);
        let documents =
            composer.article_documents(&plan.profile, item, &customer, Utc::now().date_naive());

        let out_dir = workspace.content_dir(&client, &self.content_number);
        println!(
            "{} {} prompt documents for '{}' {}",
            "✓".green(),
            documents.len(),
            client,
            item.content_number
        );
        for document in &documents {
            let path = workspace.save_document(&out_dir, &document.name, &document.body)?;
            println!("  ✎  {}", path.display());
        }
        Ok(())
    }
}
