use crate::error::MJCFBuilderError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Replace the file at `path` with `contents` in one step.
///
/// The data goes to a temporary file next to the target which is then
/// renamed over it, so readers never see a half-written document.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), MJCFBuilderError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|err| err.error)?;

    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
