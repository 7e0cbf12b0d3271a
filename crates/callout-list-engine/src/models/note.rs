use relative_path::{RelativePath, RelativePathBuf};

/// A markdown note in the vault, identified by its relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl Note {
    /// Create a new Note from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// The path string as matched by the include/exclude filters and shown
    /// in result headings
    pub fn path_str(&self) -> &str {
        self.relative_path.as_str()
    }

    /// Get the display name (without .md extension)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Extract display name from a relative path (strips .md extension)
    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for Note {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Note {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
