//! Interactive collision resolution for output paths

use std::path::{Path, PathBuf};

use filesmith_console::{prompt_nonblank, Console};
use tracing::debug;

use crate::error::FileError;

/// Resolves output path collisions by prompting for replacement names.
///
/// While the candidate names an existing file, the user is told about the
/// collision and asked for a new base name; the original suffix is kept.
#[derive(Debug, Clone)]
pub struct CollisionResolver;

impl CollisionResolver {
    /// Creates a new CollisionResolver instance
    pub fn new() -> Self {
        CollisionResolver
    }

    /// Returns a path that does not exist at the moment of return.
    ///
    /// The guarantee is point-in-time only; nothing stops another process
    /// from creating the file between resolution and write.
    pub fn resolve(
        &self,
        mut candidate: PathBuf,
        console: &mut dyn Console,
    ) -> Result<PathBuf, FileError> {
        while candidate.exists() {
            console.write_line(&format!("\n{} already exists.", candidate.display()))?;
            let stem = prompt_nonblank(
                console,
                ">>> Enter a new file name: ",
                "Filename should not be blank.",
            )?;
            candidate = Self::replace_stem(&candidate, &stem)?;
            debug!(candidate = %candidate.display(), "retrying with new name");
        }
        Ok(candidate)
    }

    /// Replaces the base name of a path, keeping its extension.
    fn replace_stem(path: &Path, stem: &str) -> Result<PathBuf, FileError> {
        if path.file_name().is_none() {
            return Err(FileError::InvalidPath(path.to_path_buf()));
        }

        let mut renamed = path.to_path_buf();
        match path.extension() {
            Some(extension) => {
                renamed.set_file_name(format!("{}.{}", stem, extension.to_string_lossy()))
            }
            None => renamed.set_file_name(stem),
        }
        Ok(renamed)
    }
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filesmith_console::ScriptedConsole;

    #[test]
    fn test_resolve_free_path_asks_nothing() {
        let resolver = CollisionResolver::new();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("fresh.py");

        let mut console = ScriptedConsole::default();
        let resolved = resolver.resolve(path.clone(), &mut console).unwrap();

        assert_eq!(resolved, path);
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_resolve_collision_keeps_suffix() {
        let resolver = CollisionResolver::new();
        let temp_dir = tempfile::tempdir().unwrap();
        let taken = temp_dir.path().join("notes.tex");
        std::fs::write(&taken, "existing").unwrap();

        let mut console = ScriptedConsole::new(["journal"]);
        let resolved = resolver.resolve(taken.clone(), &mut console).unwrap();

        assert_eq!(resolved, temp_dir.path().join("journal.tex"));
        assert!(console
            .transcript()
            .contains(&format!("{} already exists.", taken.display())));
    }

    #[test]
    fn test_resolve_loops_until_free_name() {
        let resolver = CollisionResolver::new();
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("a.py"), "").unwrap();
        std::fs::write(temp_dir.path().join("b.py"), "").unwrap();

        let mut console = ScriptedConsole::new(["b", "c"]);
        let resolved = resolver
            .resolve(temp_dir.path().join("a.py"), &mut console)
            .unwrap();

        assert_eq!(resolved, temp_dir.path().join("c.py"));
        assert_eq!(
            console.transcript().matches("already exists.").count(),
            2,
            "one notice per collision"
        );
    }

    #[test]
    fn test_resolve_rejects_blank_replacement() {
        let resolver = CollisionResolver::new();
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("demo.py"), "").unwrap();

        let mut console = ScriptedConsole::new(["", "spare"]);
        let resolved = resolver
            .resolve(temp_dir.path().join("demo.py"), &mut console)
            .unwrap();

        assert_eq!(resolved, temp_dir.path().join("spare.py"));
        assert!(console.transcript().contains("Filename should not be blank."));
    }

    #[test]
    fn test_replace_stem_without_extension() {
        let renamed = CollisionResolver::replace_stem(Path::new("plain"), "renamed").unwrap();
        assert_eq!(renamed, PathBuf::from("renamed"));
    }

    #[test]
    fn test_replace_stem_requires_file_name() {
        let result = CollisionResolver::replace_stem(Path::new("/"), "x");
        assert!(matches!(result, Err(FileError::InvalidPath(_))));
    }
}
