//! CLI entry point for the sun-exposure heatmap renderer

use clap::Parser;
use sunvis::io::cli::{Cli, Processor};

fn main() -> sunvis::Result<()> {
    let cli = Cli::parse();
    let processor = Processor::new(cli);
    processor.process().map(drop)
}
