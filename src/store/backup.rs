use crate::errors::AppResult;
use log::{debug, warn};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// How the data file is copied aside before each overwrite.
#[derive(Debug, Clone)]
pub struct BackupPolicy {
    pub suffix: String,
    /// Copy even when the data file is zero bytes long.
    pub include_empty: bool,
}

impl Default for BackupPolicy {
    fn default() -> Self {
        Self {
            suffix: ".bak".to_string(),
            include_empty: true,
        }
    }
}

impl BackupPolicy {
    /// `<data file><suffix>`, next to the data file.
    pub fn backup_path(&self, src: &Path) -> PathBuf {
        let mut name: OsString = src.as_os_str().to_owned();
        name.push(&self.suffix);
        PathBuf::from(name)
    }

    /// Copy `src` to its backup path.
    ///
    /// Returns the backup path, or `None` when nothing was copied
    /// (missing source, or an empty source with `include_empty` off).
    pub fn backup(&self, src: &Path) -> AppResult<Option<PathBuf>> {
        // 1️⃣ Nothing on disk yet
        if !src.exists() {
            debug!("no backup: {} does not exist", src.display());
            return Ok(None);
        }

        // 2️⃣ Empty file
        if !self.include_empty && fs::metadata(src)?.len() == 0 {
            warn!("skipping backup of empty file {}", src.display());
            return Ok(None);
        }

        // 3️⃣ Copy
        let dest = self.backup_path(src);
        fs::copy(src, &dest)?;
        debug!("backup written to {}", dest.display());

        Ok(Some(dest))
    }
}
