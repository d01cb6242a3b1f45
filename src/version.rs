//! Mapping from AGP versions to Android Studio release names.
//!
//! AGP prereleases are versioned like `3.4.0-beta03`, while the Studio archive lists the
//! matching IDE build as `Android Studio 3.4 Beta 3`. Stable AGP versions carry no
//! stage suffix and are passed through unchanged.

use anyhow::Result;
use std::fmt;

use crate::error::UpdateError;

/// Prefix shared by every prerelease name on the archive page.
const RELEASE_NAME_PREFIX: &str = "Android Studio";

/// Stage words as they appear in AGP versions and in Studio release names.
const STAGE_WORDS: [(&str, &str); 4] = [
    ("alpha", "Alpha"),
    ("beta", "Beta"),
    ("canary", "Canary"),
    ("rc", "RC"),
];

/// Human-readable release name used as the search key into the archive page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseName(String);

impl ReleaseName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReleaseName {
    fn from(s: &str) -> Self {
        ReleaseName(s.to_string())
    }
}

/// Returns the Android Studio release name for an AGP version.
///
/// `3.4.0` is returned as is, `3.4.0-beta03` becomes `Android Studio 3.4 Beta 3`.
pub fn release_name(agp_version: &str) -> Result<ReleaseName> {
    let parts: Vec<&str> = agp_version.split('-').collect();

    // Stable release: nothing to translate once the shape checks out
    if parts.len() == 1 {
        if !is_numeric_version(agp_version) {
            return Err(format_error(
                agp_version,
                "expected MAJOR.MINOR.PATCH[-STAGE], e.g. '3.4.0' or '3.4.0-beta03'",
            ));
        }
        return Ok(ReleaseName(agp_version.to_string()));
    }

    if parts.len() != 2 {
        return Err(format_error(agp_version, "expected at most one '-'"));
    }

    if !agp_version.is_ascii() {
        return Err(format_error(agp_version, "non-ASCII characters"));
    }

    let (prefix, suffix) = (parts[0], parts[1]);

    let major_version = strip_patch(agp_version, prefix)?;
    let suffix = capitalize_stage(suffix);
    let (release_type, minor_version) = split_stage(agp_version, &suffix)?;

    Ok(ReleaseName(format!(
        "{} {} {} {}",
        RELEASE_NAME_PREFIX, major_version, release_type, minor_version
    )))
}

/// `3.4.0` -> `3.4`. Studio names omit the patch component outside stable releases.
fn strip_patch<'a>(agp_version: &str, prefix: &'a str) -> Result<&'a str> {
    let single_digit_patch = prefix.rsplit('.').next().is_some_and(|patch| patch.len() == 1);

    if !is_numeric_version(prefix) || !single_digit_patch {
        return Err(format_error(
            agp_version,
            "expected MAJOR.MINOR.PATCH with a single-digit patch, e.g. '3.4.0'",
        ));
    }

    Ok(&prefix[..prefix.len() - 2])
}

/// Three non-empty, all-digit components separated by dots.
fn is_numeric_version(version: &str) -> bool {
    let components: Vec<&str> = version.split('.').collect();
    components.len() == 3
        && components
            .iter()
            .all(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()))
}

fn capitalize_stage(suffix: &str) -> String {
    STAGE_WORDS
        .iter()
        .fold(suffix.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// `Beta03` -> (`Beta`, `3`), `Canary10` -> (`Canary`, `10`).
fn split_stage(agp_version: &str, suffix: &str) -> Result<(String, String)> {
    if suffix.len() < 3 {
        return Err(format_error(
            agp_version,
            "stage suffix must be a stage name followed by two digits, e.g. 'beta03'",
        ));
    }

    let (release_type, minor_version) = suffix.split_at(suffix.len() - 2);

    if !minor_version.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error(
            agp_version,
            "stage suffix must end with two digits, e.g. 'beta03'",
        ));
    }

    let minor_version = minor_version.strip_prefix('0').unwrap_or(minor_version);

    Ok((release_type.to_string(), minor_version.to_string()))
}

fn format_error(agp_version: &str, reason: &str) -> anyhow::Error {
    anyhow::Error::from(UpdateError::Format(format!("'{}': {}", agp_version, reason)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind_of;

    fn name(agp: &str) -> String {
        release_name(agp).unwrap().to_string()
    }

    fn assert_format_error(agp: &str) {
        let err = release_name(agp).unwrap_err();
        assert!(
            matches!(kind_of(&err), Some(UpdateError::Format(_))),
            "expected format error for {:?}, got {}",
            agp,
            err
        );
    }

    #[test]
    fn test_stable_version_passthrough() {
        assert_eq!(name("3.4.0"), "3.4.0");
    }

    #[test]
    fn test_stable_version_with_two_digit_patch() {
        assert_eq!(name("3.3.10"), "3.3.10");
    }

    #[test]
    fn test_stable_version_must_be_numeric() {
        assert_format_error("");
        assert_format_error("latest");
        assert_format_error("3.4");
        assert_format_error("3.4.0.1");
        assert_format_error("3.4.x");
    }

    #[test]
    fn test_beta_version() {
        assert_eq!(name("3.4.0-beta03"), "Android Studio 3.4 Beta 3");
    }

    #[test]
    fn test_rc_version() {
        assert_eq!(name("3.4.0-rc01"), "Android Studio 3.4 RC 1");
    }

    #[test]
    fn test_canary_version_keeps_two_digit_minor() {
        assert_eq!(name("3.4.0-canary10"), "Android Studio 3.4 Canary 10");
    }

    #[test]
    fn test_alpha_version() {
        assert_eq!(name("3.5.0-alpha07"), "Android Studio 3.5 Alpha 7");
    }

    #[test]
    fn test_multi_digit_minor_version_component() {
        assert_eq!(name("3.10.0-beta02"), "Android Studio 3.10 Beta 2");
    }

    #[test]
    fn test_three_digit_stage_number_uses_last_two_digits() {
        // Only the last two characters are treated as the stage number
        assert_eq!(name("3.4.0-canary100"), "Android Studio 3.4 Canary1 0");
    }

    #[test]
    fn test_release_name_is_deterministic() {
        let first = release_name("3.4.0-beta03").unwrap();
        let second = release_name("3.4.0-beta03").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_stage_number() {
        assert_format_error("3.4.0-beta");
    }

    #[test]
    fn test_non_numeric_stage_number() {
        assert_format_error("3.4.0-betaXY");
    }

    #[test]
    fn test_short_suffix() {
        assert_format_error("3.4.0-01");
        assert_format_error("3.4.0-");
    }

    #[test]
    fn test_too_many_dashes() {
        assert_format_error("3.4.0-b-1");
    }

    #[test]
    fn test_prefix_without_patch() {
        assert_format_error("3-beta01");
        assert_format_error("3.4-beta01");
        assert_format_error("3.4.x-beta01");
    }

    #[test]
    fn test_two_digit_patch() {
        // Dropping two characters would leave "3.4." behind
        assert_format_error("3.4.10-beta01");
    }

    #[test]
    fn test_non_ascii_input() {
        assert_format_error("3.4.0-bêta03");
    }

    #[test]
    fn test_release_name_accessors() {
        let name = ReleaseName::from("Android Studio 3.4 Beta 3");
        assert_eq!(name.as_str(), "Android Studio 3.4 Beta 3");
        assert_eq!(name.to_string(), "Android Studio 3.4 Beta 3");
    }
}
