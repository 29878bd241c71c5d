use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the yuimod binary.
#[derive(Parser, Debug)]
#[command(
    name = "yuimod",
    version,
    about = "Rewrite resolved ES modules into YUI.add() registrations"
)]
pub struct CliArgs {
    /// Module manifest: `{ "modules": [{ "name", "relativePath", "ast" }] }`,
    /// modules listed in execution order.
    pub manifest: PathBuf,

    /// Path to yuimod.json. Defaults to yuimod.json next to the manifest.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write each module to <DIR>/<relativePath> instead of stdout.
    #[arg(short = 'o', long = "out-dir", alias = "outDir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Version marker passed to the loader (default "@VERSION@").
    #[arg(long = "version-marker", value_name = "VERSION")]
    pub version_marker: Option<String>,

    /// Enable color and formatting in error output.
    #[arg(long, value_name = "BOOL")]
    pub pretty: Option<bool>,
}
