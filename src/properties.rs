//! Rendering and writing of `studio_versions.properties`.
//!
//! The build reads the `agp`, `studio_version`, `idea_major_version` and
//! `studio_build_number` keys from this file, so the template below is a stable
//! format and must not be reworded.

use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::archive::ReleaseInfo;
use crate::error::UpdateError;
use crate::runtime::{Runtime, resolve_relative_path};

/// Location of the properties file relative to the tool's own directory.
pub const OUTPUT_RELATIVE_PATH: &str = "../buildSrc/studio_versions.properties";

/// Returns the properties file path for a tool living in `tool_dir`.
pub fn default_output_path(tool_dir: &Path) -> PathBuf {
    resolve_relative_path(tool_dir, Path::new(OUTPUT_RELATIVE_PATH))
}

/// Renders the full file contents.
pub fn render(agp_version: &str, release: &ReleaseInfo) -> String {
    format!(
        "# WARNING: This file is automatically generated.\n\
         # To update, use './development/update_studio_versions.py <agp_version>'\n\
         # This file specifies the version of the Android Gradle Plugin and Android Studio to use.\n\
         \n\
         # Android Gradle Plugin version\n\
         agp={}\n\
         # Version properties for ./studiow, which correspond to the version of AGP\n\
         studio_version={}\n\
         idea_major_version={}\n\
         studio_build_number={}\n",
        agp_version, release.version, release.idea_major_version, release.build_number
    )
}

/// Overwrites `path` with the rendered properties.
///
/// Returns true when an existing file was replaced, false when it was created.
#[tracing::instrument(skip(runtime, release))]
pub fn write<R: Runtime>(
    runtime: &R,
    path: &Path,
    agp_version: &str,
    release: &ReleaseInfo,
) -> Result<bool> {
    let contents = render(agp_version, release);

    let replaced = runtime.exists(path);
    if replaced {
        debug!("Overwriting {:?}", path);
    } else {
        debug!("Creating {:?}", path);
    }

    runtime.write(path, contents.as_bytes()).map_err(|e| {
        anyhow::Error::from(UpdateError::Io(format!(
            "cannot write {}: {:#}",
            path.display(),
            e
        )))
    })?;

    info!("Wrote {:?}", path);
    Ok(replaced)
}
