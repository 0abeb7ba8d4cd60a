//! Command-line arguments. Values given here win over `settings.json`.

use clap::Parser;
use std::path::PathBuf;

use crate::state::ModelId;

#[derive(Debug, Parser)]
#[command(name = "case-studio", version, about = "Design a phone case from your own image")]
pub struct Cli {
    /// Image to load into the preview at startup
    pub image: Option<PathBuf>,

    /// Phone model selected at startup (e.g. iphone15, samsung-s24)
    #[arg(short, long)]
    pub model: Option<ModelId>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter when RUST_LOG is not set (e.g. debug)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
