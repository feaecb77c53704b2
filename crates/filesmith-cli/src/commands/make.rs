// Interactive menu-driven file generation

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use filesmith_config::Config;
use filesmith_console::{prompt_nonblank, prompt_yes_no, Console, StdConsole};
use filesmith_files::{CollisionResolver, CreatedFile, TemplateWriter};
use filesmith_templates::{render, FileType, TemplateRequest};

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Run the interactive file generation menu until the user is done
pub struct MakeCommand {
    config: Config,
}

impl MakeCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for MakeCommand {
    async fn execute(&self) -> CliResult<()> {
        let mut console = StdConsole::new();
        let session = MenuSession::new(self.config.clone());
        session.run(&mut console).await?;

        // Pause before exit when attached to a terminal
        if atty::is(atty::Stream::Stdin) {
            let _ = console.prompt("\nPress ENTER to exit...");
        }
        Ok(())
    }
}

/// One interactive generation session over an injected console.
///
/// Prompting, validation, and re-prompt loops all happen here; rendering
/// and writing are delegated to the template and file crates.
pub struct MenuSession {
    config: Config,
    style: OutputStyle,
    resolver: CollisionResolver,
    writer: TemplateWriter,
}

impl MenuSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            style: OutputStyle::default(),
            resolver: CollisionResolver::new(),
            writer: TemplateWriter::new(),
        }
    }

    /// Overrides the output styling, mainly to disable colors.
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Runs the menu loop until the user declines another file.
    ///
    /// Returns every file created during the session. An exhausted input
    /// stream surfaces as an EOF error so the caller can exit cleanly.
    pub async fn run(&self, console: &mut dyn Console) -> CliResult<Vec<CreatedFile>> {
        let output_dir = self.config.output_dir_or_cwd()?;
        console.write_line(&format!("Output directory: {}", output_dir.display()))?;

        let mut created = Vec::new();
        loop {
            self.display_menu(console)?;
            let file_type = self.select_file_type(console)?;

            let doc_block = if file_type.uses_doc_block() {
                console.write_line("")?;
                prompt_yes_no(
                    console,
                    &self.style.prompt(">>> Include document block? (Y/N):"),
                    &self.style.warning("Enter a valid response."),
                )?
            } else {
                true
            };

            console.write_line("")?;
            let stem = prompt_nonblank(
                console,
                &self.style.prompt(">>> Enter desired filename:"),
                &self.style.warning("Filename should not be blank."),
            )?;

            match self
                .generate_one(console, &output_dir, file_type, &stem, doc_block)
                .await
            {
                Ok(file) => {
                    console.write_line("")?;
                    console.write_line(&self.style.success(&format!(
                        "File has successfully been created: {}",
                        file.path.display()
                    )))?;
                    created.push(file);
                }
                Err(e) if e.is_eof() => return Err(e),
                Err(e @ (CliError::File(_) | CliError::Template(_) | CliError::Io(_))) => {
                    // Recoverable: report and let the user try again
                    console.write_line("")?;
                    console.write_line(&self.style.error(&e.user_message()))?;
                }
                Err(e) => return Err(e),
            }

            console.write_line("")?;
            let again = prompt_yes_no(
                console,
                &self.style.prompt(">>> Make another file? (Y/N):"),
                &self.style.warning("Enter a valid response."),
            )?;
            if !again {
                break;
            }
        }

        Ok(created)
    }

    fn display_menu(&self, console: &mut dyn Console) -> CliResult<()> {
        console.write_line("")?;
        console.write_line(&self.style.header("CHOOSE DESIRED FILE TYPE:"))?;
        for (index, file_type) in FileType::ALL.iter().enumerate() {
            console.write_line(
                &self
                    .style
                    .numbered_item(index + 1, file_type.display_name()),
            )?;
        }
        Ok(())
    }

    fn select_file_type(&self, console: &mut dyn Console) -> CliResult<FileType> {
        loop {
            let input = console.prompt(&self.style.prompt(">>>"))?;
            if let Some(file_type) = input
                .parse::<usize>()
                .ok()
                .and_then(FileType::from_menu_choice)
            {
                return Ok(file_type);
            }
            console.write_line(&self.style.warning("Enter a valid choice."))?;
        }
    }

    /// Resolves collisions, renders, and writes a single file.
    async fn generate_one(
        &self,
        console: &mut dyn Console,
        output_dir: &Path,
        file_type: FileType,
        stem: &str,
        doc_block: bool,
    ) -> CliResult<CreatedFile> {
        let candidate = target_path(output_dir, stem, file_type);
        let resolved = self.resolver.resolve(candidate, console)?;

        // Renaming during collision resolution may have changed the stem,
        // which also names the class in Java skeletons.
        let resolved_stem = resolved
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CliError::Internal(format!("No file stem in {}", resolved.display())))?;

        let mut request = TemplateRequest::new(file_type, resolved_stem)
            .with_author(self.config.author.clone())
            .with_id_number(self.config.id_number.clone())
            .with_doc_block(doc_block)
            .with_tab_width(self.config.tab_width);

        if file_type == FileType::Latex {
            let title = prompt_nonblank(
                console,
                &self.style.prompt(">>> Enter desired title:"),
                &self.style.warning("Title should not be blank."),
            )?;
            request = request.with_title(title);
        }

        let content = render(&request)?;
        let created = self.writer.write(&resolved, &content).await?;
        info!(path = %created.path.display(), "created boilerplate file");
        Ok(created)
    }
}

/// Builds the candidate path for a typed filename.
///
/// The type's suffix replaces any suffix the user typed, so "demo.py"
/// stays "demo.py" while "my.file" becomes "my.py". Renames during
/// collision resolution keep dotted names whole instead; only the
/// first candidate is normalized this way.
fn target_path(output_dir: &Path, stem: &str, file_type: FileType) -> PathBuf {
    output_dir.join(stem).with_extension(file_type.suffix())
}
