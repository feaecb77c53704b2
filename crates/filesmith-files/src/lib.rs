#![warn(missing_docs)]

//! File management module for filesmith
//!
//! Provides interactive collision resolution for output paths and atomic
//! writes for rendered templates.

pub mod error;
pub mod resolver;
pub mod writer;

// Re-export public API
pub use error::FileError;
pub use resolver::CollisionResolver;
pub use writer::{CreatedFile, TemplateWriter};
