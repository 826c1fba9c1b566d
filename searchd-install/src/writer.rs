//! Descriptor writes: temp file in the same directory, then rename.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{io_err, InstallError};

/// Write `content` to `path`, replacing any previous file.
///
/// Returns whether the content differs from what was there before. The file
/// is rewritten either way.
pub(crate) fn write_descriptor(path: &Path, content: &str) -> Result<bool, InstallError> {
    let changed = match fs::read_to_string(path) {
        Ok(previous) => previous != content,
        Err(_) => true,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".searchd.tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(changed)
}
