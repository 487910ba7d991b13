use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// Read-only view of the remote template and archive hosts.
///
/// Plain GET, no authentication, no retry: a failed fetch surfaces as an
/// error and the caller decides what that means for the run.
pub trait RemoteSource {
    /// Fetch a single small file into memory.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError>;

    /// Stream a (possibly large) archive to `dest`.
    fn download_to(&self, url: &Url, dest: &Path) -> Result<(), AppError>;
}
