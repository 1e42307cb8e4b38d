use refill_core::SourceRoot;
use std::fs;

use crate::replace::SetupError;

/// Check that the local root is an existing directory and normalize it.
pub fn validate_source_root(raw: &str) -> Result<SourceRoot, SetupError> {
    match fs::metadata(raw) {
        Ok(meta) if meta.is_dir() => Ok(SourceRoot::new(raw)),
        _ => Err(SetupError::DirectoryNotFound(raw.to_string())),
    }
}
