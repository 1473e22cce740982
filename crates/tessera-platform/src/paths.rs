use std::path::{Path, PathBuf};

use tessera_common::PlatformError;

const APP_NAME: &str = "tessera";
const PARTITIONS_DIR: &str = "partitions";

/// Returns the platform-specific data directory for Tessera.
///
/// - macOS: `~/Library/Application Support/tessera`
/// - Linux: `$XDG_DATA_HOME/tessera` (defaults to `~/.local/share/tessera`)
/// - Windows: `%APPDATA%\tessera`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Root under which every storage partition gets its own directory.
pub fn partitions_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join(PARTITIONS_DIR))
}

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<(), PlatformError> {
    std::fs::create_dir_all(path).map_err(|e| {
        PlatformError::PathError(format!("failed to create {}: {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), "ensured directory");
    Ok(())
}
