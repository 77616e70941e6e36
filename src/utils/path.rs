use std::path::PathBuf;

/// Normalize a user-provided local path string into a PathBuf suitable for processing.
///
/// - Trims leading/trailing ASCII and Unicode whitespace
/// - Strips surrounding single or double quotes if present
/// - Expands a leading '~' to the HOME directory when possible
pub fn normalize_user_input_path(input: &str) -> PathBuf {
    let trimmed = input.trim();

    let unquoted = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    if unquoted.starts_with('~') {
        // "~" or "~/sub/path"
        let without_tilde = unquoted.strip_prefix("~/").or_else(|| unquoted.strip_prefix("~")).unwrap_or(unquoted);
        if let Some(home) = std::env::var_os("HOME") {
            let mut buf = PathBuf::from(home);
            if !without_tilde.is_empty() {
                buf.push(without_tilde);
            }
            return buf;
        }
    }

    PathBuf::from(unquoted)
}

/// Reduce a client-supplied filename to a single safe path component.
///
/// Only the last path segment survives (both `/` and `\` count as
/// separators), characters outside `[A-Za-z0-9._-]` become `_`, and leading
/// dots are dropped so the result can never be `..` or a hidden file.
/// Returns `None` when nothing usable is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let last = raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(raw);

    let cleaned: String = last
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("project.zip", Some("project.zip") ; "plain name")]
    #[test_case("../../etc/passwd", Some("passwd") ; "parent traversal")]
    #[test_case("C:\\Users\\me\\code.zip", Some("code.zip") ; "windows path")]
    #[test_case("my project (1).zip", Some("my_project__1_.zip") ; "spaces and parens")]
    #[test_case("..", None ; "dot dot")]
    #[test_case(".hidden.zip", Some("hidden.zip") ; "hidden file")]
    #[test_case("", None ; "empty")]
    fn test_sanitize_filename(raw: &str, expected: Option<&str>) {
        assert_eq!(sanitize_filename(raw).as_deref(), expected);
    }

    #[test]
    fn test_normalize_trims_and_unquotes() {
        assert_eq!(normalize_user_input_path("  ./demo.zip "), PathBuf::from("./demo.zip"));
        assert_eq!(normalize_user_input_path("\"/tmp/my demo.zip\""), PathBuf::from("/tmp/my demo.zip"));
        assert_eq!(normalize_user_input_path("'a.zip'"), PathBuf::from("a.zip"));
    }
}
