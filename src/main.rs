use anyhow::Result;
use clap::Parser;

use refmatch::cli::{Cli, Commands};
use refmatch::commands::{run_compare, run_gaps};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare(args) => {
            run_compare(args)?;
        }
        Commands::Gaps(args) => {
            run_gaps(args)?;
        }
    }

    Ok(())
}
