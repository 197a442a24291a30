//! One module per subcommand; each exposes an `Args` struct with
//! `run(self) -> anyhow::Result<()>`.

pub mod create;
pub mod customer;
pub mod keywords;
pub mod modify;
pub mod setup;
pub mod validate;

use std::path::PathBuf;

/// Resolve the system root: `--root`, then `$KIJIYA_ROOT`, then the current
/// directory. No implicit default is baked into the core — this is the one
/// place the root is decided.
pub fn resolve_root(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("KIJIYA_ROOT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
