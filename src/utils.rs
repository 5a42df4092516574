//! Small string helpers used by the renderers and by logging.
//!
//! - Escaping filenames for the two artifact formats
//! - Truncating long values before they reach the log

use std::borrow::Cow;

/// How filenames are written into an artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Names are emitted exactly as found on disk.
    #[default]
    Verbatim,
    /// Names are encoded so they cannot break out of their surrounding syntax.
    Escaped,
}

impl EscapeMode {
    pub fn from_flag(escape: bool) -> Self {
        if escape {
            EscapeMode::Escaped
        } else {
            EscapeMode::Verbatim
        }
    }
}

/// Format a filename for use after `./` in an HTML `src` attribute.
///
/// In [`EscapeMode::Escaped`] the name is percent-encoded, which leaves only
/// `A-Z a-z 0-9 - _ . ~ %` in the attribute.
pub fn src_component(name: &str, mode: EscapeMode) -> Cow<'_, str> {
    match mode {
        EscapeMode::Verbatim => Cow::Borrowed(name),
        EscapeMode::Escaped => urlencoding::encode(name),
    }
}

/// Format a filename as a double-quoted JSON array entry.
pub fn json_entry(name: &str, mode: EscapeMode) -> String {
    match mode {
        EscapeMode::Verbatim => format!("\"{name}\""),
        // Serializing a &str cannot fail.
        EscapeMode::Escaped => {
            serde_json::to_string(name).unwrap_or_else(|_| format!("\"{name}\""))
        }
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last character boundary before `max` bytes and
/// get `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_src_component_verbatim_is_untouched() {
        assert_eq!(src_component("a b\"c.json", EscapeMode::Verbatim), "a b\"c.json");
    }

    #[test]
    fn test_src_component_escaped() {
        assert_eq!(src_component("plain-name_1.json", EscapeMode::Escaped), "plain-name_1.json");
        assert_eq!(src_component("a b.json", EscapeMode::Escaped), "a%20b.json");
        assert_eq!(
            src_component("\"><script>.json", EscapeMode::Escaped),
            "%22%3E%3Cscript%3E.json"
        );
        assert_eq!(src_component("#1?.json", EscapeMode::Escaped), "%231%3F.json");
    }

    #[test]
    fn test_json_entry_verbatim() {
        assert_eq!(json_entry("a.json", EscapeMode::Verbatim), "\"a.json\"");
        // Quotes pass through unescaped and produce invalid JSON.
        assert_eq!(json_entry("a\"b.json", EscapeMode::Verbatim), "\"a\"b.json\"");
    }

    #[test]
    fn test_json_entry_escaped() {
        assert_eq!(json_entry("a\"b.json", EscapeMode::Escaped), r#""a\"b.json""#);
        assert_eq!(json_entry("back\\slash.json", EscapeMode::Escaped), r#""back\\slash.json""#);
        assert_eq!(json_entry("é.json", EscapeMode::Escaped), "\"é.json\"");
    }

    #[test]
    fn test_escape_mode_from_flag() {
        assert_eq!(EscapeMode::from_flag(false), EscapeMode::Verbatim);
        assert_eq!(EscapeMode::from_flag(true), EscapeMode::Escaped);
        assert_eq!(EscapeMode::default(), EscapeMode::Verbatim);
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // "é" is two bytes; cutting at 1 would split it.
        assert_eq!(truncate_for_log("éé", 1), "…(+4 bytes)");
    }
}
