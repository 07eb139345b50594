use clap::Parser;
use std::path::PathBuf;

/// Render the BarBot landing page as a static HTML document
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML page config (falls back to $BARBOT_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the document, overrides the config's `output`
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave out the `generated` meta tag
    #[arg(long)]
    pub no_timestamp: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,
}
