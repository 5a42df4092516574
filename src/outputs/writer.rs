//! Artifact file writing.

use crate::error::{FilesystemError, Result};
use crate::utils::truncate_for_log;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

/// Create or truncate `path` and write `contents` to it.
///
/// The handle is flushed before it goes out of scope so write errors are
/// reported here rather than lost on drop. It is closed on every exit path.
/// There is no temp-file-and-rename step: a failure part way through can
/// leave a partially written file behind.
///
/// # Errors
///
/// [`FilesystemError::Write`] if the file cannot be created, written or
/// flushed (missing parent directory, permission denied, disk full).
#[instrument(level = "info", skip_all, fields(path = %path.display(), bytes = contents.len()))]
pub async fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| FilesystemError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).await.map_err(write_err)?;
    file.write_all(contents.as_bytes()).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;

    debug!(preview = %truncate_for_log(contents, 200), "Artifact contents");
    info!("Wrote artifact");
    Ok(())
}
