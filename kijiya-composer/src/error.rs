//! Error types for kijiya-composer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and prompt composition.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The template store is unreadable or malformed. Callers that want the
    /// degrading behavior use [`TemplateLibrary::load_or_empty`] instead.
    ///
    /// [`TemplateLibrary::load_or_empty`]: crate::engine::TemplateLibrary::load_or_empty
    #[error("failed to load template library from {path}: {message}")]
    TemplateLoad { path: PathBuf, message: String },

    /// A modification selector outside the enumerated set.
    #[error(
        "unknown modification type '{value}'; expected one of: \
         ai_expression_elimination, content_strategy_adjustment, \
         service_specific_positioning, quality_validation, all"
    )]
    UnknownModificationType { value: String },
}
