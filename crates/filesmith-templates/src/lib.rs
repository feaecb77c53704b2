//! Boilerplate templates for filesmith
//!
//! Each supported file type renders to a fixed skeleton body, optionally
//! preceded by a document block carrying author, ID, and date metadata.
//! Rendering is pure string construction; nothing here touches the
//! filesystem.

pub mod error;
pub mod models;
pub mod render;

pub use error::TemplateError;
pub use models::{FileType, TemplateRequest, DEFAULT_TAB_WIDTH};
pub use render::{expand_tabs, format_date, render};
