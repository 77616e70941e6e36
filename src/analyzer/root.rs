//! Picking the project folder out of an extracted archive.

use super::entry::is_valid_entry;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker names that identify a project's top-level folder, in priority order
pub const ROOT_MARKERS: &[&str] = &["package.json", "README.md", ".git"];

/// A top-level directory of the extraction folder and the names it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDir {
    /// Directory name
    pub name: String,
    /// Names of the directory's immediate children
    pub children: BTreeSet<String>,
}

impl CandidateDir {
    /// Builds a candidate from a name and its children
    pub fn new<I, S>(name: &str, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// First marker present in this directory, in `ROOT_MARKERS` order
    pub fn marker(&self) -> Option<&'static str> {
        ROOT_MARKERS.iter().copied().find(|marker| self.children.contains(*marker))
    }
}

/// Chooses the project folder among top-level candidates.
///
/// Invalid entries are ignored and the rest are considered in lexicographic
/// order: the first one carrying a marker wins, otherwise the first one.
/// `None` means there is no candidate and the extraction folder itself is
/// the project root.
pub fn choose_project_dir(candidates: &[CandidateDir]) -> Option<&CandidateDir> {
    let mut valid: Vec<&CandidateDir> = candidates
        .iter()
        .filter(|candidate| is_valid_entry(&candidate.name))
        .collect();
    valid.sort_by(|a, b| a.name.cmp(&b.name));

    valid
        .iter()
        .copied()
        .find(|candidate| candidate.marker().is_some())
        .or_else(|| valid.first().copied())
}

/// Lists the subdirectories of `dir` as candidates.
///
/// Unreadable directories simply produce fewer candidates.
pub fn list_candidates(dir: &Path) -> Vec<CandidateDir> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let children = fs::read_dir(entry.path())
                .map(|children| {
                    children
                        .filter_map(|child| child.ok())
                        .filter_map(|child| child.file_name().into_string().ok())
                        .collect::<BTreeSet<_>>()
                })
                .unwrap_or_default();
            Some(CandidateDir { name, children })
        })
        .collect()
}

/// Resolves the project root inside an extraction folder
pub fn locate_project_root(extract_dir: &Path) -> PathBuf {
    let candidates = list_candidates(extract_dir);
    match choose_project_dir(&candidates) {
        Some(candidate) => {
            debug!(
                "Project root '{}' (marker: {})",
                candidate.name,
                candidate.marker().unwrap_or("none")
            );
            extract_dir.join(&candidate.name)
        }
        None => extract_dir.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_candidates() {
        assert_eq!(choose_project_dir(&[]), None);
    }

    #[test]
    fn test_only_artifacts_means_no_candidate() {
        let candidates = vec![
            CandidateDir::new("__MACOSX", ["._app"]),
            CandidateDir::new("._app", Vec::<String>::new()),
        ];
        assert_eq!(choose_project_dir(&candidates), None);
    }

    #[test]
    fn test_marker_beats_sort_order() {
        let candidates = vec![
            CandidateDir::new("zeta", ["package.json"]),
            CandidateDir::new("alpha", ["notes.txt"]),
        ];
        assert_eq!(choose_project_dir(&candidates).map(|c| c.name.as_str()), Some("zeta"));
    }

    #[test]
    fn test_first_marked_in_sorted_order() {
        let candidates = vec![
            CandidateDir::new("web", ["package.json"]),
            CandidateDir::new("api", [".git"]),
        ];
        assert_eq!(choose_project_dir(&candidates).map(|c| c.name.as_str()), Some("api"));
    }

    #[test]
    fn test_fallback_to_first_sorted() {
        let candidates = vec![
            CandidateDir::new("b", ["x.txt"]),
            CandidateDir::new("a", ["y.txt"]),
        ];
        assert_eq!(choose_project_dir(&candidates).map(|c| c.name.as_str()), Some("a"));
    }

    #[test]
    fn test_marker_lookup_is_case_sensitive() {
        let candidate = CandidateDir::new("app", ["readme.md"]);
        assert_eq!(candidate.marker(), None);
        let candidate = CandidateDir::new("app", ["README.md", ".git"]);
        assert_eq!(candidate.marker(), Some("README.md"));
    }

    #[test]
    fn test_locate_on_disk() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("__MACOSX/shop")).unwrap();
        fs::create_dir_all(temp.path().join("shop/.git")).unwrap();
        fs::write(temp.path().join("loose.txt"), "x").unwrap();

        assert_eq!(locate_project_root(temp.path()), temp.path().join("shop"));
    }

    #[test]
    fn test_locate_without_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("main.py"), "print()").unwrap();

        assert_eq!(locate_project_root(temp.path()), temp.path());
    }
}
