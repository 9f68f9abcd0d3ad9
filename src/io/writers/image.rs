use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Write `data` to `output`, replacing any existing file, and return the
/// number of bytes written.
///
/// The bytes are staged in a temporary file next to `output` and renamed
/// into place, so `output` is either untouched or complete.
pub fn write_image(output: &Path, data: &[u8]) -> Result<u64> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".seawatch-").suffix(".part");
    if let Some(mode) = target_permissions(output) {
        builder.permissions(mode);
    }
    let mut staged = builder
        .tempfile_in(dir)
        .map_err(|e| Error::persistence(output, e))?;
    staged
        .write_all(data)
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| Error::persistence(output, e))?;
    staged
        .persist(output)
        .map_err(|e| Error::persistence(output, e.error))?;

    let written = fs::metadata(output)
        .map(|m| m.len())
        .map_err(|e| Error::persistence(output, e))?;
    debug!("Wrote {} bytes to {:?}", written, output);
    Ok(written)
}

/// Mode for the staged file: an existing destination keeps its own, a new
/// one gets what a plain create would (0o666 less the umask).
fn target_permissions(output: &Path) -> Option<fs::Permissions> {
    match fs::metadata(output) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
