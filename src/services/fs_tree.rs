//! Tree placement helpers for moving the extracted application into place.

use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Move `src` to `dst`.
///
/// A plain rename when the filesystem allows it; otherwise the tree is
/// copied and the source removed, which is still all-or-nothing from the
/// caller's point of view because `dst` did not exist beforehand.
pub fn move_tree(src: &Path, dst: &Path) -> Result<(), AppError> {
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }

    copy_tree(src, dst)?;
    fs::remove_dir_all(src)?;
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else if file_type.is_symlink() {
            copy_link(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_link(src: &Path, dst: &Path) -> Result<(), AppError> {
    let referent = fs::read_link(src)?;
    std::os::unix::fs::symlink(referent, dst)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_link(src: &Path, dst: &Path) -> Result<(), AppError> {
    fs::copy(src, dst)?;
    Ok(())
}
