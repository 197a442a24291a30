//! `kijiya customer <client-id>` — print the stored customer prompt.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use kijiya_core::{ClientId, SystemConfig, Workspace};

use super::resolve_root;

/// Arguments for `kijiya customer`.
#[derive(Args, Debug)]
pub struct CustomerArgs {
    /// Client identifier (G-ID).
    pub client_id: String,

    /// System root directory (defaults to $KIJIYA_ROOT, then the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl CustomerArgs {
    pub fn run(self) -> Result<()> {
        let root = resolve_root(self.root);
        let config = SystemConfig::load(&root).context("failed to load system configuration")?;
        let workspace = Workspace::new(&config);
        let client = ClientId::from(self.client_id.as_str());

        match workspace.load_customer_prompt(&client)? {
            Some(prompt) => {
                print!("{prompt}");
                Ok(())
            }
            None => bail!("no customer prompt stored for '{client}' — run `kijiya setup` first"),
        }
    }
}
