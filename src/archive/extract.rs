//! Pure extraction steps over fetched archive pages.

use anyhow::{Context, Result};
use regex::Regex;
use reqwest::Url;

use super::ReleaseInfo;
use super::patterns::{
    DOWNLOAD_LINK_PATTERN, IFRAME_SRC_PATTERN, RELEASE_NAME_LEADING_BOUNDARY,
    RELEASE_NAME_TRAILING_BOUNDARY,
};
use crate::error::UpdateError;
use crate::version::ReleaseName;

/// Returns the absolute URL of the first iframe on the archive index page.
///
/// HTML-escaped ampersands are decoded and a relative source is resolved against
/// `base_url`, the URL the page was fetched from.
pub fn extract_frame_url(html: &str, base_url: &str) -> Result<String> {
    let re = Regex::new(IFRAME_SRC_PATTERN).context("Invalid iframe pattern")?;

    let src = re
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            anyhow::Error::from(UpdateError::NotFound(format!(
                "no iframe in archive page {}",
                base_url
            )))
        })?;

    let src = src.replace("&amp;", "&");
    let base = Url::parse(base_url).with_context(|| format!("Invalid archive URL {}", base_url))?;
    let url = base.join(&src).map_err(|e| {
        anyhow::Error::from(UpdateError::NotFound(format!(
            "iframe source {:?} is not a valid URL: {}",
            src, e
        )))
    })?;

    Ok(url.to_string())
}

/// Finds the first Windows download link listed after `name` in the frame page.
///
/// The name must stand alone: digits directly before or after it mean a different
/// release, e.g. `Canary 10` when looking for `Canary 1`.
pub fn extract_release_info(html: &str, name: &ReleaseName) -> Result<ReleaseInfo> {
    let pattern = format!(
        "{}{}{}{}",
        RELEASE_NAME_LEADING_BOUNDARY,
        regex::escape(name.as_str()),
        RELEASE_NAME_TRAILING_BOUNDARY,
        DOWNLOAD_LINK_PATTERN
    );
    let re = Regex::new(&pattern).context("Invalid download link pattern")?;

    let caps = re.captures(html).ok_or_else(|| {
        anyhow::Error::from(UpdateError::NotFound(format!(
            "no download link for '{}' in release list",
            name
        )))
    })?;

    Ok(ReleaseInfo {
        version: caps[1].to_string(),
        idea_major_version: caps[2].to_string(),
        build_number: caps[3].to_string(),
    })
}
