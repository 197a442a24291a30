//! kijiya — SEO article prompt generation CLI.
//!
//! # Usage
//!
//! ```text
//! kijiya setup <workbook.xlsx> [--root <dir>]
//! kijiya create <client-id> <content-number> [--root <dir>]
//! kijiya modify <client-id> <content-number> <article.md> [--type <type>] [--root <dir>]
//! kijiya customer <client-id> [--root <dir>]
//! kijiya keywords <client-id> <content-number> [--root <dir>]
//! kijiya validate <article.md>
//! ```
//!
//! The system root resolves from `--root`, then `$KIJIYA_ROOT`, then the
//! current directory.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, customer::CustomerArgs, keywords::KeywordsArgs, modify::ModifyArgs,
    setup::SetupArgs, validate::ValidateArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "kijiya",
    version,
    about = "Generate SEO article prompts from order workbooks",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract a client content plan from an order workbook.
    Setup(SetupArgs),

    /// Compose the article prompt document set for one content item.
    Create(CreateArgs),

    /// Compose modification prompts for an already-drafted article.
    Modify(ModifyArgs),

    /// Print the stored customer-understanding prompt.
    Customer(CustomerArgs),

    /// Show the keyword plan for one content item.
    Keywords(KeywordsArgs),

    /// Run the boundary quality checks over an article draft.
    Validate(ValidateArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Setup(args) => args.run(),
        Commands::Create(args) => args.run(),
        Commands::Modify(args) => args.run(),
        Commands::Customer(args) => args.run(),
        Commands::Keywords(args) => args.run(),
        Commands::Validate(args) => args.run(),
    }
}
