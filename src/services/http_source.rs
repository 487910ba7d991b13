//! Blocking HTTP adapter for template and archive fetches.

use std::fs::File;
use std::path::Path;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::RemoteSource;

/// reqwest-backed [`RemoteSource`].
///
/// No request timeout is configured: a hung or failed transfer surfaces
/// outright and the operator re-invokes, matching the no-retry contract of
/// the flows.
#[derive(Debug, Clone)]
pub struct HttpRemoteSource {
    client: Client,
}

impl HttpRemoteSource {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    fn get(&self, url: &Url) -> Result<reqwest::blocking::Response, AppError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| download_failed(url, e))?;

        response.error_for_status().map_err(|e| download_failed(url, e))
    }
}

impl RemoteSource for HttpRemoteSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        let bytes = self.get(url)?.bytes().map_err(|e| download_failed(url, e))?;
        Ok(bytes.to_vec())
    }

    fn download_to(&self, url: &Url, dest: &Path) -> Result<(), AppError> {
        let mut response = self.get(url)?;
        let mut file = File::create(dest)?;
        response.copy_to(&mut file).map_err(|e| download_failed(url, e))?;
        Ok(())
    }
}

fn download_failed(url: &Url, error: reqwest::Error) -> AppError {
    AppError::DownloadFailed { url: url.to_string(), details: error.to_string() }
}
