//! Dependency manifest discovery.

use super::walk::project_files;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Manifest filenames searched for, in reporting order
pub const KNOWN_MANIFESTS: &[&str] = &[
    "requirements.txt",
    "package.json",
    "pom.xml",
    "setup.py",
    "environment.yml",
    "build.gradle",
];

/// Distinct manifest filenames found in a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    found: BTreeSet<&'static str>,
}

impl DependencySet {
    /// Records a file name if it is a known manifest
    pub fn record(&mut self, file_name: &str) {
        if let Some(known) = KNOWN_MANIFESTS.iter().find(|known| **known == file_name) {
            self.found.insert(*known);
        }
    }

    /// Whether `manifest` was found
    pub fn contains(&self, manifest: &str) -> bool {
        self.found.contains(manifest)
    }

    /// Whether no manifest was found
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Found manifests in `KNOWN_MANIFESTS` order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        KNOWN_MANIFESTS
            .iter()
            .copied()
            .filter(move |name| self.found.contains(name))
    }
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join(", "))
    }
}

impl<'a> FromIterator<&'a str> for DependencySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(names: I) -> Self {
        let mut set = Self::default();
        for name in names {
            set.record(name);
        }
        set
    }
}

/// Finds every known manifest anywhere under `root`
pub fn detect_manifests(root: &Path) -> DependencySet {
    let mut set = DependencySet::default();
    for entry in project_files(root) {
        if let Some(name) = entry.file_name().to_str() {
            set.record(name);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_duplicates_collapse_and_order_is_fixed() {
        let set: DependencySet = ["setup.py", "package.json", "README.md", "package.json"]
            .into_iter()
            .collect();

        assert_eq!(set.to_string(), "package.json, setup.py");
        assert!(set.contains("setup.py"));
        assert!(!set.contains("README.md"));
    }

    #[test]
    fn test_nested_manifests_found_and_artifacts_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("backend")).unwrap();
        fs::create_dir_all(temp.path().join("frontend")).unwrap();
        fs::create_dir_all(temp.path().join("__MACOSX")).unwrap();
        fs::write(temp.path().join("backend/requirements.txt"), "flask").unwrap();
        fs::write(temp.path().join("frontend/package.json"), "{}").unwrap();
        fs::write(temp.path().join("__MACOSX/pom.xml"), "").unwrap();
        fs::write(temp.path().join("._build.gradle"), "").unwrap();

        let set = detect_manifests(temp.path());
        assert_eq!(set.to_string(), "requirements.txt, package.json");
    }

    #[test]
    fn test_exact_name_only() {
        let set: DependencySet = ["Package.json", "requirements-dev.txt"].into_iter().collect();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "");
    }
}
