//! CLI entry point for the pixel-art maze and tiling generator

use clap::Parser;
use pixmaze::io::cli::{Cli, Generator};

fn main() -> pixmaze::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let generator = Generator::new(cli);
    generator.run()
}
