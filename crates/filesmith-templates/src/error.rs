//! Error types for template rendering

use thiserror::Error;

/// Errors that can occur while rendering a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A LaTeX document cannot be rendered without a title
    #[error("LaTeX template requires a title")]
    MissingTitle,
}
