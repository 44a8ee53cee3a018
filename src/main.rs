use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use git_largest::cli::Cli;
use git_largest::finder::Finder;
use git_largest::repository::SystemGit;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let git = SystemGit::new(&cli.repo_path);
    let finder = Finder::new(cli.finder_config());

    // Dropping the pipeline on Ctrl-C kills any running git child
    let report = tokio::select! {
        report = finder.run(&git) => report?,
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("Caught Ctrl-C. Exiting.");
            return Ok(());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out, cli.format)?;
    out.flush()?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
