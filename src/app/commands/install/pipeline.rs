//! Fetch the archive, extract it, and place the tree under the install root.
//!
//! Nothing lands under the install root until the new tree has fully
//! extracted; any failure before that point removes the temp directory and
//! leaves a pre-existing installation exactly as it was.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::app::status;
use crate::domain::{AppError, InstallConfig, InstallManifest};
use crate::ports::RemoteSource;
use crate::services::{archive, fs_tree};

const ARCHIVE_FILE_NAME: &str = "portal.tar.gz";
const INSTALL_SUBDIRS: [&str; 3] = ["data", "logs", "etc/systemd"];

pub fn fetch_extract_place<R: RemoteSource>(
    remote: &R,
    config: &InstallConfig,
) -> Result<(), AppError> {
    // A prior aborted run may have left a stale scratch tree behind.
    if config.temp_dir.exists() {
        fs::remove_dir_all(&config.temp_dir)?;
    }
    fs::create_dir_all(&config.temp_dir)?;

    match run(remote, config) {
        Ok(()) => {
            fs::remove_dir_all(&config.temp_dir)?;
            Ok(())
        }
        Err(err) => {
            let _ = fs::remove_dir_all(&config.temp_dir);
            Err(err)
        }
    }
}

fn run<R: RemoteSource>(remote: &R, config: &InstallConfig) -> Result<(), AppError> {
    let archive_path = config.temp_dir.join(ARCHIVE_FILE_NAME);
    remote.download_to(&config.archive_url, &archive_path)?;
    status::ok(format!("Downloaded {}", config.archive_url));

    let digest = sha256_file(&archive_path)?;

    let extract_dir = config.temp_dir.join("extract");
    archive::unpack_tar_gz(&archive_path, &extract_dir)?;
    let source_tree = archive::single_top_level_dir(&extract_dir)?;
    status::ok("Archive extracted");

    // Replace any previous installation only now that a complete new tree
    // exists on disk.
    if config.install_root.exists() {
        fs::remove_dir_all(&config.install_root)?;
    }
    for sub in INSTALL_SUBDIRS {
        fs::create_dir_all(config.install_root.join(sub))?;
    }

    fs_tree::move_tree(&source_tree, &config.app_path())?;

    let manifest = InstallManifest::new(&config.archive_url, digest);
    fs::write(config.manifest_path(), manifest.to_toml()?)?;
    status::ok(format!("Portal placed at {}", config.app_path().display()));

    Ok(())
}

fn sha256_file(path: &Path) -> Result<String, AppError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    let digest = hasher.finalize();
    Ok(digest.iter().map(|byte| format!("{:02x}", byte)).collect())
}
