use crate::{report::Mode, style::ColorChoice};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Turn test counts into a one-line status report")]
pub struct Args {
    /// Number of passed tests
    #[arg(short, long, default_value_t = 20)]
    pub passed: u64,

    /// Number of failed tests
    #[arg(short, long, default_value_t = 0)]
    pub failed: u64,

    /// Report template, overrides the config.
    /// Placeholders: {passed}, {failed}, {total}
    #[arg(short, long)]
    pub template: Option<String>,

    /// How counts are put into the template, overrides the config
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Path to a config file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// When to color the exclamation
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Output machine-readable JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
