//! README discovery and excerpting.

use super::walk::project_files;
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const README_NAME: &str = "readme.md";

/// Opening lines of the project README, or why there are none
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeExcerpt {
    /// Non-blank, trimmed lines joined with newlines
    Found(String),
    /// No README.md anywhere under the project root
    Missing,
    /// A README.md exists but reading it failed
    Unreadable,
}

impl ReadmeExcerpt {
    /// Placeholder when no README exists
    pub const MISSING: &'static str = "No README.md file found.";
    /// Placeholder when the README cannot be read
    pub const UNREADABLE: &'static str = "README.md found but could not be read.";

    /// Text that goes into the summary
    pub fn as_text(&self) -> &str {
        match self {
            Self::Found(text) => text,
            Self::Missing => Self::MISSING,
            Self::Unreadable => Self::UNREADABLE,
        }
    }
}

impl fmt::Display for ReadmeExcerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// First file under `root` named `README.md` in any letter case
pub fn find_readme(root: &Path) -> Option<PathBuf> {
    project_files(root)
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .map_or(false, |name| name.to_lowercase() == README_NAME)
        })
        .map(|entry| entry.into_path())
}

/// Reads the first `max_lines` non-blank lines of the project README
pub fn readme_excerpt(root: &Path, max_lines: usize) -> ReadmeExcerpt {
    let Some(path) = find_readme(root) else {
        debug!("No README.md under {}", root.display());
        return ReadmeExcerpt::Missing;
    };

    match fs::read(&path) {
        Ok(bytes) => ReadmeExcerpt::Found(excerpt(&decode_lossy(&bytes), max_lines)),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            ReadmeExcerpt::Unreadable
        }
    }
}

/// Decodes UTF-8, dropping byte sequences that do not decode
pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Trimmed non-blank lines of `text`, at most `max_lines`, joined with newlines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn excerpt(text: &str, max_lines: usize) -> String {
    text.split(|c: char| c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n")
}
