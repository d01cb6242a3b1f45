//! The update pipeline: name the release, scrape it, write the properties file.

use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::{
    archive::{FetchRelease, ReleaseInfo},
    properties,
    runtime::Runtime,
    version::{ReleaseName, release_name},
};

pub mod config;

pub use config::{Config, UpdateOptions};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub release_name: ReleaseName,
    pub release: ReleaseInfo,
    pub output_path: PathBuf,
    /// False for dry runs
    pub written: bool,
    /// An existing properties file was overwritten
    pub replaced: bool,
}

#[tracing::instrument(skip(runtime, options))]
pub async fn update<R: Runtime>(runtime: R, options: UpdateOptions) -> Result<UpdateReport> {
    let config = Config::new(runtime, &options)?;
    run(config, &options.agp_version, options.dry_run).await
}

/// Runs the pipeline with the given collaborators.
///
/// The properties file is only touched once the release has been scraped, so a
/// failed lookup leaves the previous file intact.
#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime, F: FetchRelease>(
    config: Config<R, F>,
    agp_version: &str,
    dry_run: bool,
) -> Result<UpdateReport> {
    let name = release_name(agp_version)?;
    info!("AGP {} corresponds to '{}'", agp_version, name);

    let release = config.fetcher.fetch(&name).await?;

    let replaced = if dry_run {
        print!("{}", properties::render(agp_version, &release));
        false
    } else {
        properties::write(&config.runtime, &config.output_path, agp_version, &release)?
    };

    Ok(UpdateReport {
        release_name: name,
        release,
        output_path: config.output_path,
        written: !dry_run,
        replaced,
    })
}
