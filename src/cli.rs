use bower_sbom::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Generate CycloneDX SBOMs for projects using Bower components
#[derive(Parser, Debug)]
#[command(name = "bower-sbom")]
#[command(version)]
#[command(
    about = "Generate CycloneDX SBOMs for projects using Bower components",
    long_about = None
)]
pub struct Args {
    /// Output format: xml or json [default: xml]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to bower-sbom.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Omit the random serial number for reproducible output
    #[arg(long)]
    pub no_serial_number: bool,

    /// Report packages excluded for lacking a name instead of dropping them silently
    #[arg(long)]
    pub warn_missing_identifier: bool,

    /// Abort on the first manifest that cannot be parsed instead of skipping it
    #[arg(long)]
    pub fail_on_invalid_manifest: bool,

    /// JSON array of SPDX license identifiers replacing the bundled list
    #[arg(long, value_name = "FILE")]
    pub license_list: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
