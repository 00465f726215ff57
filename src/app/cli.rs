use clap::Parser;

/// imgfetch - load an image from a URL and view it in your terminal 🖼️
#[derive(Parser, Debug)]
#[command(name = "imgfetch", version, about)]
pub struct Args {
    /// Image URL to load on start-up
    pub url: Option<String>,

    /// Start with grayscale rendering on
    #[arg(long, short = 'g')]
    pub grayscale: bool,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
