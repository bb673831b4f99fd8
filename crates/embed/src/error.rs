//! Generator errors.

use thiserror::Error;

/// Errors returned by [`crate::WidgetCodeGenerator`].
///
/// Widget configs are never rejected: unknown types fall back to the generic
/// embed and missing customization takes defaults. What remains is the
/// template engine itself failing to write output.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A compiled template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}
