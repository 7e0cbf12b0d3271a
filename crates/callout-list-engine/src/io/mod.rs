use crate::models::Note;
use crate::pipeline::NoteSource;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid vault directory: {0}")]
    InvalidVaultDir(String),
}

/// Read a markdown note and return its content
pub fn read_file(relative_path: &RelativePath, vault_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(vault_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for markdown files under the vault directory, as vault-relative
/// paths sorted for a stable enumeration order
pub fn scan_markdown_files(vault_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !vault_root.exists() {
        return Err(IoError::InvalidVaultDir(
            "vault directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(vault_root, vault_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    vault_root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(vault_root, &path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
            && let Ok(relative) = path.strip_prefix(vault_root)
        {
            files.push(RelativePathBuf::from_path(relative).map_err(|_| {
                IoError::InvalidVaultDir(format!("non-relative entry: {}", path.display()))
            })?);
        }
    }

    Ok(())
}

pub fn validate_vault_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidVaultDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// The standard [`NoteSource`] over a vault directory on disk.
#[derive(Debug, Clone)]
pub struct VaultSource {
    vault_root: PathBuf,
}

impl VaultSource {
    pub fn new(vault_root: PathBuf) -> Self {
        Self { vault_root }
    }

    pub fn vault_root(&self) -> &Path {
        &self.vault_root
    }
}

impl NoteSource for VaultSource {
    type Error = IoError;

    fn list_notes(&self) -> Result<Vec<Note>, IoError> {
        let files = scan_markdown_files(&self.vault_root)?;
        Ok(files.into_iter().map(Note::new).collect())
    }

    fn read_note(&self, note: &Note) -> Result<String, IoError> {
        read_file(note.relative_path(), &self.vault_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_note, create_test_vault};

    #[test]
    fn test_scan_finds_markdown_files() {
        // Given a vault with markdown files
        let vault = create_test_vault();
        create_test_note(&vault, "test1.md", ">[!todo] a\n>x\n");
        create_test_note(&vault, "test2.md", "plain prose");

        // When scanning for files
        let files = scan_markdown_files(vault.path()).unwrap();

        // Then we find the expected files, sorted
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].as_str(), "test1.md");
        assert_eq!(files[1].as_str(), "test2.md");
    }

    #[test]
    fn test_scan_keeps_paths_vault_relative() {
        let vault = create_test_vault();
        create_test_note(&vault, "root.md", "# Root");

        let sub_dir = vault.path().join("subfolder");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("nested.md"), "# Nested").unwrap();

        let files = scan_markdown_files(vault.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.as_str() == "root.md"));
        assert!(files.iter().any(|f| f.as_str() == "subfolder/nested.md"));
    }

    #[test]
    fn test_scan_ignores_non_markdown_files() {
        let vault = create_test_vault();
        create_test_note(&vault, "document.md", "# Markdown");
        create_test_note(&vault, "image.png", "fake image data");
        create_test_note(&vault, "config.json", "{}");

        let files = scan_markdown_files(vault.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].as_str(), "document.md");
    }

    #[test]
    fn test_scan_invalid_vault_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_markdown_files(&nonexistent_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("vault directory"));
    }

    #[test]
    fn test_validate_vault_dir() {
        let vault = create_test_vault();
        assert!(validate_vault_dir(vault.path()).is_ok());
        assert!(matches!(
            validate_vault_dir(Path::new("/nonexistent/path")),
            Err(IoError::InvalidVaultDir(_))
        ));
    }

    #[test]
    fn test_read_file_success() {
        let vault = create_test_vault();
        create_test_note(&vault, "test.md", "# Test Content\n\nParagraph");

        let content = read_file(RelativePath::new("test.md"), vault.path()).unwrap();
        assert_eq!(content, "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_file_not_found() {
        let vault = create_test_vault();
        let result = read_file(RelativePath::new("nonexistent.md"), vault.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_vault_source_lists_and_reads() {
        let vault = create_test_vault();
        create_test_note(&vault, "a.md", "content a");

        let source = VaultSource::new(vault.path().to_path_buf());
        let notes = source.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(source.read_note(&notes[0]).unwrap(), "content a");
    }
}
