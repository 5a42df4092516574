//! Data models shared by the scanner and the renderers.
//!
//! - [`FilenameList`]: the sorted set of matched names a renderer consumes
//! - [`ArtifactKind`]: which of the two generators produced an artifact
//! - [`GenerationReport`]: what a single generator run wrote

use itertools::Itertools;
use std::fmt;
use std::path::PathBuf;

/// Matched filenames in ascending lexicographic order.
///
/// The only way to build a `FilenameList` is through [`FilenameList::from_unsorted`]
/// (or `collect()`), so the sorted-order invariant always holds. `String`'s
/// `Ord` compares UTF-8 bytes, which is the same as comparing code points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameList(Vec<String>);

impl FilenameList {
    /// Sort an arbitrary sequence of names into a new list.
    pub fn from_unsorted<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self(names.into_iter().sorted().collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop one name from the list, keeping the order.
    ///
    /// Returns `true` if the name was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.0.binary_search_by(|n| n.as_str().cmp(name)) {
            Ok(idx) => {
                self.0.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for FilenameList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_unsorted(iter)
    }
}

impl<'a> IntoIterator for &'a FilenameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sort names into ascending lexicographic order.
pub fn sort_names<I>(names: I) -> FilenameList
where
    I: IntoIterator<Item = String>,
{
    FilenameList::from_unsorted(names)
}

/// The two artifacts this tool knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// HTML page with one `<lottie-player>` per animation.
    Html,
    /// JSON array of animation filenames.
    Manifest,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Html => f.write_str("html"),
            ArtifactKind::Manifest => f.write_str("manifest"),
        }
    }
}

/// Summary of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub kind: ArtifactKind,
    /// Where the artifact was written.
    pub output: PathBuf,
    /// Number of filenames listed in the artifact.
    pub entries: usize,
    /// Size of the artifact in bytes.
    pub bytes: usize,
}
