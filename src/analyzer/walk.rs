//! Deterministic traversal of the extracted project.

use super::entry::keep_walk_entry;
use log::warn;
use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Every valid file under `root`.
///
/// Inside each directory files come before subdirectories and both are
/// visited in name order, so the first match of a search is the shallowest
/// one along the leftmost branch. Packaging artifacts are pruned and
/// unreadable entries are skipped with a warning.
pub fn project_files(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(keep_walk_entry)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "unknown path".to_string());
                warn!("Skipping (error): {} - {}", path_str, e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_order_and_pruning() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("a/deep")).unwrap();
        fs::create_dir_all(root.join("__MACOSX")).unwrap();
        fs::write(root.join("z.py"), "").unwrap();
        fs::write(root.join("a/b.js"), "").unwrap();
        fs::write(root.join("a/deep/c.rs"), "").unwrap();
        fs::write(root.join("__MACOSX/d.py"), "").unwrap();
        fs::write(root.join("._e.py"), "").unwrap();

        let seen: Vec<String> = project_files(root)
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();

        assert_eq!(seen, vec!["z.py", "a/b.js", "a/deep/c.rs"]);
    }
}
