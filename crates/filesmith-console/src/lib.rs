#![warn(missing_docs)]

//! Console I/O abstraction for filesmith
//!
//! All interactive prompting goes through the [`Console`] trait so the menu
//! loop and collision resolver can be driven by scripted input in tests
//! instead of a real terminal.

pub mod console;
pub mod error;
pub mod script;

pub use console::{prompt_nonblank, prompt_yes_no, Console, StdConsole};
pub use error::ConsoleError;
pub use script::ScriptedConsole;
