use anyhow::Result;
use clap::Parser;
use deenbile::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
