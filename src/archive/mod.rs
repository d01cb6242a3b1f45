//! Scraper for the Android Studio release archive.
//!
//! The archive index embeds the real release list in an iframe, so a lookup takes
//! two hops: fetch the index and extract the frame URL, then fetch the frame and
//! extract the download link that follows the release name.

mod extract;
pub mod patterns;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

pub use extract::{extract_frame_url, extract_release_info};

use crate::http::HttpClient;
use crate::version::ReleaseName;

/// Studio build metadata scraped from a Windows download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Studio version directory, e.g. `3.4.0.13`
    pub version: String,
    /// IntelliJ IDEA major version, e.g. `183`
    pub idea_major_version: String,
    /// Studio build number, e.g. `5289776`
    pub build_number: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchRelease: Send + Sync {
    async fn fetch(&self, name: &ReleaseName) -> Result<ReleaseInfo>;
}

pub struct ArchiveScraper {
    http: HttpClient,
    archive_url: String,
}

impl ArchiveScraper {
    #[tracing::instrument(skip(http, archive_url))]
    pub fn new(http: HttpClient, archive_url: Option<String>) -> Self {
        let archive_url = archive_url.unwrap_or_else(|| patterns::ARCHIVE_URL.to_string());
        Self { http, archive_url }
    }

    pub fn archive_url(&self) -> &str {
        &self.archive_url
    }

    /// First hop: the URL of the frame holding the release list.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_frame_url(&self) -> Result<String> {
        debug!("Fetching archive index from {}...", self.archive_url);
        let html = self.http.get_text(&self.archive_url).await?;
        let frame_url = extract_frame_url(&html, &self.archive_url)?;
        debug!("Release list frame at {}", frame_url);
        Ok(frame_url)
    }

    /// Second hop: the download metadata listed under `name` in the frame page.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_release_info(
        &self,
        frame_url: &str,
        name: &ReleaseName,
    ) -> Result<ReleaseInfo> {
        debug!("Fetching release list from {}...", frame_url);
        let html = self.http.get_text(frame_url).await?;
        extract_release_info(&html, name)
    }
}

#[async_trait]
impl FetchRelease for ArchiveScraper {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, name: &ReleaseName) -> Result<ReleaseInfo> {
        info!("Looking up '{}' in the Android Studio archive...", name);
        let frame_url = self.fetch_frame_url().await?;
        let release = self.fetch_release_info(&frame_url, name).await?;
        info!(
            "Found Studio {} (IDEA {}, build {})",
            release.version, release.idea_major_version, release.build_number
        );
        Ok(release)
    }
}
