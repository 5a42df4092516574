//! JSON manifest rendering.
//!
//! The manifest is assembled as text, not serialized through a JSON value:
//!
//! ```text
//! ["a.json",
//! "b.json"]
//! ```
//!
//! In [`EscapeMode::Verbatim`] a name containing `"` or `\` produces a
//! manifest that is not valid JSON. [`EscapeMode::Escaped`] writes every name
//! as a proper JSON string literal instead.

use super::Render;
use crate::models::{ArtifactKind, FilenameList};
use crate::utils::{EscapeMode, json_entry};
use itertools::Itertools;

/// Renders the filename manifest.
#[derive(Debug, Clone, Default)]
pub struct JsonManifest {
    pub escape: EscapeMode,
}

impl Render for JsonManifest {
    const KIND: ArtifactKind = ArtifactKind::Manifest;

    fn render(&self, names: &FilenameList) -> String {
        format!(
            "[{}]",
            names
                .iter()
                .map(|name| json_entry(name, self.escape))
                .join(",\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sort_names;

    fn list(names: &[&str]) -> FilenameList {
        sort_names(names.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_empty_manifest() {
        assert_eq!(JsonManifest::default().render(&FilenameList::default()), "[]");
    }

    #[test]
    fn test_two_files_sorted() {
        let manifest = JsonManifest::default().render(&list(&["b.json", "a.json"]));
        assert_eq!(manifest, "[\"a.json\",\n\"b.json\"]");
    }

    #[test]
    fn test_manifest_parses_as_json() {
        let manifest = JsonManifest::default().render(&list(&["c.json", "a.json", "b.json"]));
        let parsed: Vec<String> = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed, ["a.json", "b.json", "c.json"]);
    }

    #[test]
    fn test_verbatim_quote_breaks_json() {
        let manifest = JsonManifest::default().render(&list(&["a\"b.json"]));
        assert_eq!(manifest, "[\"a\"b.json\"]");
        assert!(serde_json::from_str::<Vec<String>>(&manifest).is_err());
    }

    #[test]
    fn test_escaped_manifest_round_trips_awkward_names() {
        let renderer = JsonManifest {
            escape: EscapeMode::Escaped,
        };
        let manifest = renderer.render(&list(&["a\"b.json", "c\\d.json", "tab\t.json"]));
        let parsed: Vec<String> = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed, ["a\"b.json", "c\\d.json", "tab\t.json"]);
    }
}
