use std::{fs, io, path::Path};

/// Creates `path` and its parents when missing. An empty path means the working directory.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)
}
