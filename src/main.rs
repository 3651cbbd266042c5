use clap::Parser;

use circlefill::cli::{run, Cli};
use circlefill::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    run(Cli::parse())
}
