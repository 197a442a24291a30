//! `kijiya setup <workbook.xlsx>` — extract a workbook into a client workspace.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;

use kijiya_composer::{customer_prompt, DEFAULT_MODIFICATION_TEMPLATES, DEFAULT_SECTION_TEMPLATES};
use kijiya_core::{SystemConfig, Workspace};
use kijiya_extractor::extract_plan;

use super::resolve_root;

/// Arguments for `kijiya setup`.
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Path to the order workbook (.xlsx).
    pub workbook: PathBuf,

    /// System root directory (defaults to $KIJIYA_ROOT, then the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl SetupArgs {
    pub fn run(self) -> Result<()> {
        if !self.workbook.exists() {
            bail!("workbook not found: {}", self.workbook.display());
        }
        let root = resolve_root(self.root);
        let config = SystemConfig::load(&root).context("failed to load system configuration")?;

        let plan = extract_plan(&self.workbook, &config.sheets)
            .with_context(|| format!("failed to extract '{}'", self.workbook.display()))?;
        if plan.profile.client_id.is_empty() {
            bail!("workbook carries no G-ID value — cannot create a client workspace");
        }

        let workspace = Workspace::new(&config);
        let client = plan.profile.client_id.clone();
        let client_dir = workspace
            .ensure_client_layout(&client)
            .with_context(|| format!("failed to create workspace for '{client}'"))?;

        let prompt = customer_prompt(&plan.profile, Utc::now().date_naive());
        workspace.save_customer_prompt(&client, &prompt)?;
        workspace.save_plan(&plan)?;
        workspace.save_keyword_files(&plan)?;

        scaffold_default_templates(&config)?;

        println!(
            "{} client '{}' set up ({} content items)",
            "✓".green(),
            client,
            plan.items.len()
        );
        println!("  {}", client_dir.display());
        Ok(())
    }
}

/// Write the embedded default template libraries into the configured store
/// when no library exists there yet. Existing stores are never touched.
fn scaffold_default_templates(config: &SystemConfig) -> Result<()> {
    let defaults = [
        (&config.section_templates, DEFAULT_SECTION_TEMPLATES),
        (&config.modification_templates, DEFAULT_MODIFICATION_TEMPLATES),
    ];
    for (path, body) in defaults {
        if path.exists() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, body)
            .with_context(|| format!("failed to scaffold '{}'", path.display()))?;
    }
    Ok(())
}
