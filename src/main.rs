use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use studio_versions::http::DEFAULT_TIMEOUT_SECS;
use studio_versions::update::{UpdateOptions, update};

const SUCCESS_MESSAGE: &str = "
Successfully updated studio_versions.properties.
Run \x1b[92m./studiow\x1b[0m and \x1b[92m./gradlew assembleDebug\x1b[0m to verify nothing broke!

Note: you may get warnings about gradle being unable to find artifacts: this is fine; run
\x1b[92m./development/importMaven/import_maven_artifacts.py --name=<missing_artifact>\x1b[0m
to add them to the prebuilts directory - you will need to commit these as well. If this command
fails, appending \x1b[92m:linux\x1b[0m to the end of the artifact name sometimes works.
";

/// studio-versions - Android Studio version updater
///
/// Scrapes the Android Studio release archive to find the Studio build matching a
/// given Android Gradle Plugin version, then updates studio_versions.properties.
///
/// Examples:
///   studio-versions 3.4.0-beta03
#[derive(Parser, Debug)]
#[command(author, version = env!("STUDIO_VERSIONS_VERSION"), about)]
struct Cli {
    /// The AGP version, e.g. 3.4.0-beta03
    #[arg(value_name = "AGP_VERSION")]
    agp_version: String,

    /// Release archive index URL
    #[arg(long = "archive-url", env = "STUDIO_ARCHIVE_URL", value_name = "URL")]
    archive_url: Option<String>,

    /// Directory of this tool; the file is written to its sibling ../buildSrc
    /// (defaults to ./development)
    #[arg(long = "tool-dir", env = "STUDIO_VERSIONS_TOOL_DIR", value_name = "PATH")]
    tool_dir: Option<PathBuf>,

    /// Write the properties to this file instead (overrides --tool-dir)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print the properties instead of writing them
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn into_options(self) -> UpdateOptions {
        UpdateOptions {
            agp_version: self.agp_version,
            archive_url: self.archive_url,
            tool_dir: self.tool_dir,
            output: self.output,
            timeout: Duration::from_secs(self.timeout),
            dry_run: self.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = studio_versions::runtime::RealRuntime;

    let report = update(runtime, cli.into_options()).await?;
    if report.written {
        println!("{}", SUCCESS_MESSAGE);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["studio-versions", "3.4.0-beta03"]).unwrap();
        assert_eq!(cli.agp_version, "3.4.0-beta03");
        assert_eq!(cli.output, None);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_options_parsing() {
        let cli = Cli::try_parse_from([
            "studio-versions",
            "3.4.0-rc01",
            "--output",
            "/tmp/studio.properties",
            "--timeout",
            "5",
            "--dry-run",
        ])
        .unwrap();

        let options = cli.into_options();
        assert_eq!(options.agp_version, "3.4.0-rc01");
        assert_eq!(options.output, Some(PathBuf::from("/tmp/studio.properties")));
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert!(options.dry_run);
    }

    #[test]
    fn test_cli_tool_dir_parsing() {
        let cli = Cli::try_parse_from([
            "studio-versions",
            "--tool-dir",
            "support/development",
            "3.4.0",
        ])
        .unwrap();
        assert_eq!(cli.tool_dir, Some(PathBuf::from("support/development")));
    }

    #[test]
    fn test_cli_missing_version_fails() {
        assert!(Cli::try_parse_from(["studio-versions"]).is_err());
    }

    #[test]
    fn test_cli_extra_argument_fails() {
        assert!(Cli::try_parse_from(["studio-versions", "3.4.0", "3.5.0"]).is_err());
    }
}
