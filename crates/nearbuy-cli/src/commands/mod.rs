//! Command implementations

mod browse;
mod categories;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    match cli.command {
        Commands::Browse(args) => browse::execute(args, &output, cli.explain).await,
        Commands::Categories => categories::execute(&output),
    }
}
