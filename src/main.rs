//! CLI entry point for the collage wallpaper compositor

use clap::Parser;
use montage::io::cli::{Cli, WallpaperProcessor};
use montage::io::logger;

fn main() -> montage::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.quiet);
    let mut processor = WallpaperProcessor::new(cli);
    processor.process()
}
