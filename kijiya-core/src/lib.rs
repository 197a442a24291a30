//! kijiya core library — domain types, workspace persistence, configuration.
//!
//! Public API surface:
//! - [`types`] — newtypes and the content-plan data model
//! - [`config`] — [`SystemConfig`] / [`SheetNames`]
//! - [`workspace`] — the per-client [`Workspace`] repository
//! - [`error`] — [`WorkspaceError`] / [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;
pub mod workspace;

pub use config::{SheetNames, SystemConfig};
pub use error::{ConfigError, WorkspaceError};
pub use types::{
    company_name_from_order, ArticleRule, ClientId, ContentItem, ContentKey, ContentPlan,
    CustomerProfile, KeywordNeed,
};
pub use workspace::Workspace;
