use crate::error::{RenameError, Result};
use std::path::Path;

/// Normalizes an extension to its bare form (`.mzML` → `mzML`) and
/// rejects values that would escape the data directory.
pub fn normalize_extension(ext: &str) -> Result<String> {
    let bare = ext.strip_prefix('.').unwrap_or(ext);

    if bare.is_empty() {
        return Err(RenameError::InvalidExtension(
            ext.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if bare.contains('/') || bare.contains('\\') {
        return Err(RenameError::InvalidExtension(
            ext.to_string(),
            "cannot contain path separators".to_string(),
        ));
    }

    Ok(bare.to_string())
}

pub fn validate_delimiter(delimiter: char) -> Result<u8> {
    match delimiter {
        '"' | '\n' | '\r' => Err(RenameError::InvalidDelimiter(delimiter)),
        c if c.is_ascii() => Ok(c as u8),
        _ => Err(RenameError::InvalidDelimiter(delimiter)),
    }
}

pub fn validate_data_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(RenameError::DataDirNotFound(dir.to_path_buf()));
    }

    if !dir.is_dir() {
        return Err(RenameError::Other(anyhow::anyhow!(
            "Data directory is not a directory: {}",
            dir.display()
        )));
    }

    Ok(())
}
