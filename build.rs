use std::{
    process::Command,
    time::{SystemTime, UNIX_EPOCH},
};

/// Environment variable a packager can set to pin the reported version.
const VERSION_OVERRIDE_ENV: &str = "STUDIO_VERSIONS_BUILD_VERSION";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed={}", VERSION_OVERRIDE_ENV);

    // Release tarballs have no .git directory, so packagers pass the version in
    let version = match std::env::var(VERSION_OVERRIDE_ENV) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => git_version(),
    };

    // Read by `--version` in src/main.rs
    println!("cargo:rustc-env=STUDIO_VERSIONS_VERSION={}", version);
}

/// Version from `git describe`, with a timestamp for dirty or unknown trees.
fn git_version() -> String {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output();

    match output {
        Ok(o) if o.status.success() => {
            let git_output = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // Strip 'v' prefix if present (e.g., "v1.0.0" -> "1.0.0")
            let version = git_output.strip_prefix('v').unwrap_or(&git_output);

            if version.ends_with("-dirty") || version.is_empty() {
                // Dirty working tree or no output: append timestamp
                format!("{}-{}", version, timestamp())
            } else {
                version.to_string()
            }
        }
        // Git command failed (not a checkout, or git missing): use timestamp as version
        _ => format!("0.0.0-unknown-{}", timestamp()),
    }
}

fn timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
