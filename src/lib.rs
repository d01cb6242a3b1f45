pub mod archive;
pub mod error;
pub mod http;
pub mod properties;
pub mod runtime;
pub mod update;
pub mod version;

pub use error::UpdateError;
