//! Filtering of packaging artifacts that desktop archivers add to zip files.

use std::ffi::OsStr;
use walkdir::DirEntry;

/// Resource-fork folder written by the macOS archiver
pub const MACOS_METADATA_DIR: &str = "__MACOSX";
/// Prefix of AppleDouble sidecar files
pub const APPLE_DOUBLE_PREFIX: &str = "._";

/// Whether a single file or directory name belongs to the project
pub fn is_valid_entry(name: &str) -> bool {
    !(name == MACOS_METADATA_DIR || name.starts_with(APPLE_DOUBLE_PREFIX))
}

/// Same check for OS strings; names that are not UTF-8 are kept
pub fn is_valid_os_entry(name: &OsStr) -> bool {
    name.to_str().map_or(true, is_valid_entry)
}

/// `filter_entry` predicate for walks: the walk root itself is always kept
pub fn keep_walk_entry(entry: &DirEntry) -> bool {
    entry.depth() == 0 || is_valid_os_entry(entry.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("src", true)]
    #[test_case("__MACOSX", false)]
    #[test_case("._README.md", false)]
    #[test_case(".git", true)]
    #[test_case("_MACOSX", true)]
    #[test_case("__macosx", true)]
    fn test_is_valid_entry(name: &str, expected: bool) {
        assert_eq!(is_valid_entry(name), expected);
    }
}
