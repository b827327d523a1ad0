use clap::Parser;

use crate::core::game::Start;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Successful throws to play (overrides config)
    #[arg(long)]
    pub throws: Option<u64>,

    /// Start layout: "uniform" or "skewed" (overrides config)
    #[arg(long)]
    pub start: Option<Start>,

    /// RNG seed for a reproducible run (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render the 2x2 comparison figure instead of a single run
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Output directory for figures (overrides config)
    #[arg(long)]
    pub out_dir: Option<String>,
}
