//! Runtime abstraction for system operations.
//!
//! Side effects go through the [`Runtime`] trait so they can be mocked in tests.
//!
//! # Structure
//!
//! - `path` - Lexical path helpers (normalize, resolve relative to a base)
//! - `env` - Process environment (current directory)
//! - `fs` - File system operations

mod env;
mod fs;
pub mod path;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use path::resolve_relative_path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    /// Write `contents` to `path`, truncating any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }
}
