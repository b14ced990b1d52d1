use anyhow::Result;
use clap::Parser;
use expense_tracker::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    expense_tracker::logging::init(cli.verbose);
    cli.run()
}
