//! Tar.gz extraction for the downloaded portal archive.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use crate::domain::AppError;

/// Unpack `archive` into `dest`, creating `dest` first.
pub fn unpack_tar_gz(archive: &Path, dest: &Path) -> Result<(), AppError> {
    let file = File::open(archive)?;
    fs::create_dir_all(dest)?;

    let mut tar = Archive::new(GzDecoder::new(file));
    tar.unpack(dest).map_err(|e| AppError::ExtractFailed(e.to_string()))?;
    Ok(())
}

/// Locate the single top-level directory a release tarball unpacks to.
pub fn single_top_level_dir(dest: &Path) -> Result<PathBuf, AppError> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dest)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            return Err(AppError::ArchiveLayout(format!(
                "stray top-level file {}",
                entry.file_name().to_string_lossy()
            )));
        }
        dirs.push(entry.path());
    }

    match dirs.as_slice() {
        [single] => Ok(single.clone()),
        [] => Err(AppError::ArchiveLayout("archive was empty".to_string())),
        _ => Err(AppError::ArchiveLayout(format!(
            "expected one top-level directory, found {}",
            dirs.len()
        ))),
    }
}
