// List the supported boilerplate file types

use async_trait::async_trait;

use filesmith_templates::FileType;

use super::Command;
use crate::error::CliResult;
use crate::output::OutputStyle;

/// List supported file types with their suffixes
pub struct TypesCommand;

impl TypesCommand {
    pub fn new() -> Self {
        TypesCommand
    }
}

impl Default for TypesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for TypesCommand {
    async fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();
        println!("{}", style.header("Supported file types:"));
        for (index, file_type) in FileType::ALL.iter().enumerate() {
            println!(
                "{}",
                style.numbered_item(
                    index + 1,
                    &format!("{} (.{})", file_type.display_name(), file_type.suffix())
                )
            );
        }
        Ok(())
    }
}
