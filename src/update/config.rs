use anyhow::Result;
use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    archive::{ArchiveScraper, FetchRelease},
    http::{DEFAULT_TIMEOUT_SECS, HttpClient},
    properties::default_output_path,
    runtime::{Runtime, resolve_relative_path},
};

/// Name of the directory the tool lives in, relative to the repository root.
pub const DEFAULT_TOOL_DIR: &str = "development";

/// User-facing options for one update run.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub agp_version: String,
    /// Archive index URL (defaults to the public Android Studio archive)
    pub archive_url: Option<String>,
    /// Directory of the tool; the properties file is its `../buildSrc` sibling
    pub tool_dir: Option<PathBuf>,
    /// Explicit properties file path, overrides `tool_dir`
    pub output: Option<PathBuf>,
    pub timeout: Duration,
    pub dry_run: bool,
}

impl UpdateOptions {
    pub fn new(agp_version: impl Into<String>) -> Self {
        Self {
            agp_version: agp_version.into(),
            archive_url: None,
            tool_dir: None,
            output: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            dry_run: false,
        }
    }
}

pub struct Config<R: Runtime, F: FetchRelease> {
    pub runtime: R,
    pub fetcher: F,
    pub output_path: PathBuf,
}

impl<R: Runtime> Config<R, ArchiveScraper> {
    pub fn new(runtime: R, options: &UpdateOptions) -> Result<Self> {
        let http = HttpClient::with_timeout(options.timeout)?;
        let fetcher = ArchiveScraper::new(http, options.archive_url.clone());
        let output_path = resolve_output_path(&runtime, options)?;

        debug!(
            "Archive: {}, output: {:?}, timeout: {:?}",
            fetcher.archive_url(),
            output_path,
            options.timeout
        );

        Ok(Self {
            runtime,
            fetcher,
            output_path,
        })
    }
}

/// Explicit output wins; otherwise the file sits next to the tool directory.
/// Relative paths are taken from the current directory.
pub fn resolve_output_path<R: Runtime>(runtime: &R, options: &UpdateOptions) -> Result<PathBuf> {
    let cwd = runtime.current_dir()?;

    if let Some(output) = &options.output {
        return Ok(resolve_relative_path(&cwd, output));
    }

    let tool_dir = match &options.tool_dir {
        Some(dir) => resolve_relative_path(&cwd, dir),
        None => cwd.join(DEFAULT_TOOL_DIR),
    };

    Ok(default_output_path(&tool_dir))
}
