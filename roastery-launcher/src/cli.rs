use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
pub struct Cli {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Directory holding a pre-built presentation bundle, served as fallback.
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,
}
