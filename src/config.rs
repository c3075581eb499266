use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 30)]
    pub rows: usize,

    #[arg(long, default_value_t = 40)]
    pub cols: usize,

    /// Random extra walls scattered inside the border.
    #[arg(long, default_value_t = 0)]
    pub num_walls: usize,

    /// Seed for wall placement; omit for a fresh layout each run.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 25)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,
}
