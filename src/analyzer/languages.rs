//! Language detection by file extension.

use super::walk::project_files;
use std::fmt;
use std::path::Path;

/// Extension to language table; extensions match exactly and case-sensitively
pub const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("py", "Python"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("jsx", "JavaScript"),
    ("cpp", "C++"),
    ("c", "C"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("php", "PHP"),
    ("kt", "Kotlin"),
];

/// Convert a file extension (without the dot) to a language name
pub fn extension_to_language(ext: &str) -> Option<&'static str> {
    EXTENSION_LANGUAGES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, language)| *language)
}

/// Language of a file, judged by the text after its last dot
pub fn language_of(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(extension_to_language)
}

/// Per-language file counts, kept in the order languages were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTally {
    counts: Vec<(&'static str, usize)>,
}

impl LanguageTally {
    /// Empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more file of `language`
    pub fn record(&mut self, language: &'static str) {
        match self.counts.iter_mut().find(|(name, _)| *name == language) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((language, 1)),
        }
    }

    /// Number of files seen for `language`
    pub fn count(&self, language: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| *name == language)
            .map_or(0, |(_, count)| *count)
    }

    /// Language/count pairs in first-seen order
    pub fn entries(&self) -> &[(&'static str, usize)] {
        &self.counts
    }

    /// Whether no recognised file was seen
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Renders as `Python (2), JavaScript (1)`
impl fmt::Display for LanguageTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (language, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", language, count)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a Path> for LanguageTally {
    fn from_iter<I: IntoIterator<Item = &'a Path>>(paths: I) -> Self {
        let mut tally = Self::new();
        for language in paths.into_iter().filter_map(language_of) {
            tally.record(language);
        }
        tally
    }
}

/// Tallies the languages of every valid file under `root`
pub fn detect_languages(root: &Path) -> LanguageTally {
    let mut tally = LanguageTally::new();
    for entry in project_files(root) {
        if let Some(language) = language_of(entry.path()) {
            tally.record(language);
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use test_case::test_case;

    #[test_case("main.py", Some("Python"))]
    #[test_case("App.tsx", Some("TypeScript"))]
    #[test_case("MAIN.PY", None ; "extension match is case sensitive")]
    #[test_case("archive.tar.gz", None)]
    #[test_case(".bashrc", None ; "dotfile has no extension")]
    #[test_case("Makefile", None)]
    fn test_language_of(name: &str, expected: Option<&str>) {
        assert_eq!(language_of(Path::new(name)), expected);
    }

    #[test]
    fn test_tally_display_keeps_first_seen_order() {
        let tally: LanguageTally = ["b.js", "a.py", "c.py", "d.go"]
            .iter()
            .map(Path::new)
            .collect();

        assert_eq!(tally.to_string(), "JavaScript (1), Python (2), Go (1)");
        assert_eq!(tally.count("Python"), 2);
        assert_eq!(tally.count("Rust"), 0);
    }

    #[test]
    fn test_detect_languages_on_disk() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("__MACOSX")).unwrap();
        fs::write(temp.path().join("a.py"), "").unwrap();
        fs::write(temp.path().join("b.py"), "").unwrap();
        fs::write(temp.path().join("c.js"), "").unwrap();
        fs::write(temp.path().join("._d.py"), "").unwrap();
        fs::write(temp.path().join("__MACOSX/e.py"), "").unwrap();

        let tally = detect_languages(temp.path());
        assert_eq!(tally.to_string(), "Python (2), JavaScript (1)");
    }

    #[test]
    fn test_empty_tally() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        assert!(detect_languages(temp.path()).is_empty());
    }
}
