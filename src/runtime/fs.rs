//! File system operations.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write to {:?}", path))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_write_truncates() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file = dir.path().join("studio_versions.properties");

        assert!(!runtime.exists(&file));

        runtime.write(&file, b"a much longer first version").unwrap();
        runtime.write(&file, b"short").unwrap();

        assert!(runtime.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short");
    }

    #[test]
    fn test_real_runtime_write_missing_directory() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file = dir.path().join("buildSrc").join("studio_versions.properties");

        let err = runtime.write(&file, b"agp=3.4.0").unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
