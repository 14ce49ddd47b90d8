use clap::Parser;
use kerfbox::cli::{run, Cli};
use kerfbox::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    run(&cli)
}
