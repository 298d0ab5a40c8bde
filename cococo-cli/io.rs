//! Output handling for the coverage document.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Writes the finished document to `output`, or to stdout when `None`.
///
/// A file destination is written through a temporary file in the same
/// directory and then renamed into place, so readers never observe a
/// partially written document and a previous report survives a failed write.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the temporary file cannot be created or
/// renamed, and [`Error::WriteOutput`] if writing fails.
pub fn write_document(document: &str, output: Option<&Path>) -> Result<()> {
    match output {
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::WriteOutput { path: None, source })
        }
        Some(path) => write_file(document, path),
    }
}

fn write_file(document: &str, path: &Path) -> Result<()> {
    let create_error = |source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    };

    // Use the parent directory, or current directory if none
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir).map_err(create_error)?;

    file.write_all(document.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(|source| Error::WriteOutput {
            path: Some(path.to_path_buf()),
            source,
        })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(create_error)?;
    }

    file.persist(path).map_err(|err| create_error(err.error))?;
    Ok(())
}
