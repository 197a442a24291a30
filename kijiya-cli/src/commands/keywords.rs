//! `kijiya keywords <client-id> <content-number>` — show the keyword plan.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use kijiya_core::{ClientId, SystemConfig, Workspace, WorkspaceError};

use super::resolve_root;

/// Arguments for `kijiya keywords`.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Client identifier (G-ID).
    pub client_id: String,

    /// Content number, e.g. "1" or "コンテンツ1".
    pub content_number: String,

    /// System root directory (defaults to $KIJIYA_ROOT, then the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Tabled)]
struct NeedRow {
    #[tabled(rename = "kind")]
    kind: String,
    #[tabled(rename = "keyword")]
    keyword: String,
    #[tabled(rename = "headline")]
    headline: String,
}

impl KeywordsArgs {
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

        println!("{} — target keywords: {}", item.content_number, item.target_keywords);

        if item.needs_keywords.is_empty() {
            println!("(no needs keywords)");
            return Ok(());
        }

        let rows: Vec<NeedRow> = item
            .needs_keywords
            .iter()
            .map(|need| NeedRow {
                kind: need.kind.clone(),
                keyword: need.keyword.clone(),
                headline: need.headline.clone(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{table}");
        Ok(())
    }
}
