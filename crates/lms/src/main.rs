//! lms - multi-tenant learning management system backend

use clap::Parser;
use color_eyre::eyre::Result;
use lms::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(cmd) => cmd.run().await,
        Command::Universities(cmd) => cmd.run().await,
        Command::Admins(cmd) => cmd.run().await,
    }
}
