//! Locations and markup patterns of the Android Studio release archive.
//!
//! The archive is scraped with regular expressions, so an upstream layout change
//! should only require edits in this file.

/// Public archive index. The actual release list is served from an embedded iframe.
pub const ARCHIVE_URL: &str = "https://developer.android.com/studio/archive.html";

/// First capture group: the iframe source on the archive index page.
pub const IFRAME_SRC_PATTERN: &str = r#"iframe src="(.*?)""#;

/// Placed before the escaped release name so `3.3.1` does not match inside `13.3.1`.
pub const RELEASE_NAME_LEADING_BOUNDARY: &str = r"(?:^|[^0-9.])";

/// Placed after the escaped release name so `Canary 1` does not match `Canary 10`.
pub const RELEASE_NAME_TRAILING_BOUNDARY: &str = r"[^0-9]";

/// Appended after the trailing boundary. Captures, in order: the Studio version
/// directory, the IDEA major version and the build number of the Windows zip that
/// follows the release name.
pub const DOWNLOAD_LINK_PATTERN: &str = concat!(
    r"[\s\S]*?",
    r"https://dl\.google\.com/dl/android/studio/ide-zips/",
    r"(.*?)/android-studio-ide-(.*?)\.(.*?)-windows\.zip",
);
