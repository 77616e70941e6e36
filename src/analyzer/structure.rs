//! Tree-style rendering of the project's folder layout.

use super::entry::is_valid_os_entry;
use log::warn;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PIPE: &str = "│   ";
const BRANCH: &str = "├── ";
const LEAF: &str = "└── ";

/// Folder listing, or the reason there is none
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderStructure {
    /// Rendered tree
    Listing(String),
    /// The project root itself could not be listed
    Unavailable,
}

impl FolderStructure {
    /// Placeholder shown when the root cannot be listed
    pub const UNAVAILABLE: &'static str = "Folder structure could not be read.";

    /// Text that goes into the summary
    pub fn as_text(&self) -> &str {
        match self {
            Self::Listing(text) => text,
            Self::Unavailable => Self::UNAVAILABLE,
        }
    }
}

impl fmt::Display for FolderStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// Renders `root` as an indented tree, `max_depth` directory levels below it.
///
/// Each directory prints as a branch line followed by its files, then its
/// subdirectories, both in name order. Directories deeper than `max_depth`
/// are left out together with their files.
pub fn folder_structure(root: &Path, max_depth: usize) -> FolderStructure {
    let mut lines = Vec::new();
    match render_dir(root, 0, max_depth, &mut lines) {
        Ok(()) => FolderStructure::Listing(lines.join("\n")),
        Err(e) => {
            warn!("Could not list project root {}: {}", root.display(), e);
            FolderStructure::Unavailable
        }
    }
}

fn render_dir(dir: &Path, level: usize, max_depth: usize, lines: &mut Vec<String>) -> io::Result<()> {
    let (dirs, files) = sorted_children(dir)?;

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    lines.push(format!("{}{}{}/", PIPE.repeat(level), BRANCH, name));

    let file_indent = PIPE.repeat(level + 1);
    for file in files {
        lines.push(format!("{}{}{}", file_indent, LEAF, file));
    }

    if level >= max_depth {
        return Ok(());
    }
    for sub in dirs {
        if let Err(e) = render_dir(&sub, level + 1, max_depth, lines) {
            warn!("Skipping unreadable directory {}: {}", sub.display(), e);
        }
    }
    Ok(())
}

/// Valid subdirectories and file names of `dir`, each sorted by name
fn sorted_children(dir: &Path) -> io::Result<(Vec<PathBuf>, Vec<String>)> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !is_valid_os_entry(&name) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        } else {
            files.push(name.to_string_lossy().into_owned());
        }
    }

    dirs.sort();
    files.sort();
    Ok((dirs, files))
}
