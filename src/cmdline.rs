use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Classic grid snake. Arrow keys steer, Escape quits.")]
pub struct Args {
    /// Run without a window, printing one JSON snapshot per tick to stdout
    #[arg(long)]
    pub headless: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: u64,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds between simulation ticks
    #[arg(long, default_value_t = 0.1)]
    pub tick_interval: f64,

    /// Side of one grid cell, in pixels
    #[arg(long, default_value_t = 20)]
    pub block_size: u32,

    /// Window width, in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height, in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
