//! Artifact generation: scan, sort, render, write.
//!
//! # Submodules
//!
//! - [`html`]: renders the `lottie-player` demo page
//! - [`json`]: renders the filename manifest
//! - [`writer`]: writes a rendered artifact to disk
//!
//! # Default layout
//!
//! ```text
//! demo/
//! ├── *.json          # animations listed on the demo page
//! ├── demo.html       # html generator output
//! └── lottie/
//!     ├── *.json      # animations listed in the manifest
//!     └── manifest.json  # manifest generator output, never lists itself
//! ```

pub mod html;
pub mod json;
pub mod writer;

use crate::error::Result;
use crate::models::{ArtifactKind, FilenameList, GenerationReport};
use crate::scanner::{SuffixFilter, canonical, collect_sorted};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Turns a sorted list of filenames into the text of an artifact.
pub trait Render {
    /// Which artifact this renderer produces.
    const KIND: ArtifactKind;

    fn render(&self, names: &FilenameList) -> String;
}

/// Everything one generator run needs: where to read, what to match, where
/// to write, and how to render.
#[derive(Debug, Clone)]
pub struct Job<R> {
    pub source_dir: PathBuf,
    pub filter: SuffixFilter,
    pub output: PathBuf,
    pub renderer: R,
}

/// Run one generator end to end.
///
/// The source directory is fully scanned before the output file is opened, so
/// a missing or unreadable source directory leaves any existing artifact
/// untouched and creates no new one.
#[instrument(level = "info", skip_all, fields(kind = %R::KIND, source_dir = %job.source_dir.display(), output = %job.output.display()))]
pub async fn generate<R: Render>(job: &Job<R>) -> Result<GenerationReport> {
    let mut names = collect_sorted(&job.source_dir, &job.filter).await?;

    if let Some(own_name) = self_listing_name(job).await {
        if names.remove(&own_name) {
            info!(name = %own_name, "Skipped the artifact's own file in the listing");
        }
    }

    let contents = job.renderer.render(&names);
    writer::write_artifact(&job.output, &contents).await?;

    let report = GenerationReport {
        kind: R::KIND,
        output: job.output.clone(),
        entries: names.len(),
        bytes: contents.len(),
    };
    info!(entries = report.entries, bytes = report.bytes, "Generated artifact");
    Ok(report)
}

/// The output's file name, if the output sits directly inside the source
/// directory and would itself be picked up by the filter.
async fn self_listing_name<R>(job: &Job<R>) -> Option<String> {
    let file_name = job.output.file_name()?.to_str()?;
    if !job.filter.matches(file_name) {
        return None;
    }
    let parent = match job.output.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return None,
    };
    let (source, parent) = (canonical(&job.source_dir).await?, canonical(parent).await?);
    (source == parent).then(|| file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilesystemError;
    use crate::outputs::html::HtmlDemo;
    use crate::outputs::json::JsonManifest;
    use std::collections::BTreeSet;
    use std::fs as stdfs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        stdfs::write(dir.join(name), b"{\"v\":\"5.7.0\"}").unwrap();
    }

    fn manifest_job(source_dir: &Path, output: PathBuf) -> Job<JsonManifest> {
        Job {
            source_dir: source_dir.to_path_buf(),
            filter: SuffixFilter::new(".json"),
            output,
            renderer: JsonManifest::default(),
        }
    }

    fn html_job(source_dir: &Path) -> Job<HtmlDemo> {
        Job {
            source_dir: source_dir.to_path_buf(),
            filter: SuffixFilter::new(".json"),
            output: source_dir.join("demo.html"),
            renderer: HtmlDemo::default(),
        }
    }

    #[tokio::test]
    async fn test_manifest_scenario() {
        let root = tempdir().unwrap();
        let lottie = root.path().join("lottie");
        stdfs::create_dir(&lottie).unwrap();
        touch(&lottie, "b.json");
        touch(&lottie, "a.json");
        let output = root.path().join("manifest.json");

        let report = generate(&manifest_job(&lottie, output.clone())).await.unwrap();

        assert_eq!(stdfs::read_to_string(&output).unwrap(), "[\"a.json\",\n\"b.json\"]");
        assert_eq!(report.kind, ArtifactKind::Manifest);
        assert_eq!(report.entries, 2);
        assert_eq!(report.bytes, 20);
    }

    #[tokio::test]
    async fn test_html_scenario_last_line() {
        let root = tempdir().unwrap();
        touch(root.path(), "x.json");

        let job = html_job(root.path());
        generate(&job).await.unwrap();

        let html = stdfs::read_to_string(&job.output).unwrap();
        assert_eq!(
            html.lines().last(),
            Some(r#"<lottie-player autoplay loop mode="normal" src="./x.json"></lottie-player>"#)
        );
    }

    #[tokio::test]
    async fn test_listing_is_complete_without_duplicates() {
        let root = tempdir().unwrap();
        let expected: BTreeSet<String> = (0..25).map(|i| format!("anim-{i:03}.json")).collect();
        for name in &expected {
            touch(root.path(), name);
        }
        touch(root.path(), "readme.md");
        let output = root.path().join("out").join("list.txt");
        stdfs::create_dir(root.path().join("out")).unwrap();

        generate(&manifest_job(root.path(), output.clone())).await.unwrap();

        let parsed: Vec<String> =
            serde_json::from_str(&stdfs::read_to_string(&output).unwrap()).unwrap();
        let mut sorted = parsed.clone();
        sorted.sort();
        assert_eq!(parsed, sorted);
        assert_eq!(parsed.len(), expected.len());
        assert_eq!(parsed.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[tokio::test]
    async fn test_generate_is_idempotent() {
        let root = tempdir().unwrap();
        for name in ["spin.json", "pulse.json", "twirl.json"] {
            touch(root.path(), name);
        }
        let job = html_job(root.path());

        generate(&job).await.unwrap();
        let first = stdfs::read(&job.output).unwrap();
        generate(&job).await.unwrap();
        let second = stdfs::read(&job.output).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_manifest_inside_source_dir_does_not_list_itself() {
        let root = tempdir().unwrap();
        touch(root.path(), "a.json");
        let output = root.path().join("manifest.json");
        let job = manifest_job(root.path(), output.clone());

        generate(&job).await.unwrap();
        let first = stdfs::read_to_string(&output).unwrap();
        let report = generate(&job).await.unwrap();
        let second = stdfs::read_to_string(&output).unwrap();

        assert_eq!(first, "[\"a.json\"]");
        assert_eq!(first, second);
        assert_eq!(report.entries, 1);
    }

    #[tokio::test]
    async fn test_missing_source_dir_creates_no_output() {
        let root = tempdir().unwrap();
        let missing = root.path().join("demo");
        let output = root.path().join("manifest.json");

        let err = generate(&manifest_job(&missing, output.clone()))
            .await
            .unwrap_err();

        assert!(matches!(err, FilesystemError::ReadDir { .. }));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_missing_source_dir_keeps_previous_output() {
        let root = tempdir().unwrap();
        let missing = root.path().join("demo");
        let output = root.path().join("manifest.json");
        stdfs::write(&output, "[\"old.json\"]").unwrap();

        assert!(generate(&manifest_job(&missing, output.clone())).await.is_err());
        assert_eq!(stdfs::read_to_string(&output).unwrap(), "[\"old.json\"]");
    }

    #[tokio::test]
    async fn test_unwritable_output_is_filesystem_error() {
        let root = tempdir().unwrap();
        touch(root.path(), "a.json");
        let output = root.path().join("missing-dir").join("manifest.json");

        let err = generate(&manifest_job(root.path(), output)).await.unwrap_err();
        assert!(matches!(err, FilesystemError::Write { .. }));
    }
}
