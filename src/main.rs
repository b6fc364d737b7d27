//! CLI entry point for the wood plank floor generator

use clap::Parser;
use plankfloor::io::cli::{Cli, FloorProcessor, init_tracing};

fn main() -> plankfloor::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let mut processor = FloorProcessor::new(cli);
    processor.process().map(|_| ())
}
