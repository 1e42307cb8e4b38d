use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    #[error("cannot walk {root}: {source}")]
    Walk {
        root: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub struct Scanner;

impl Scanner {
    /// Every regular file below `root`, recursively.
    ///
    /// Symlinks are not followed. Unreadable entries and non UTF-8 names below
    /// the root are skipped with a warning; failing to open the root itself is
    /// an error.
    pub fn enumerate_files(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, ScannerError> {
        info!("Enumerating files under {}", root);

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if e.depth() == 0 => {
                    return Err(ScannerError::Walk {
                        root: root.to_path_buf(),
                        source: e,
                    });
                }
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match Utf8PathBuf::from_path_buf(entry.into_path()) {
                Ok(path) => files.push(path),
                Err(raw) => warn!("Skipping non UTF-8 path: {}", raw.display()),
            }
        }

        debug!("Found {} files under {}", files.len(), root);
        Ok(files)
    }
}
