use anyhow::Context;
use flowtag::cli::{commands, Cli};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Exactly three positionals; anything else gets the usage line and status 1
    let cli = match Cli::parse_exact(std::env::args_os()) {
        Some(cli) => cli,
        None => {
            println!("{}", Cli::usage());
            process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();

    info!("Starting flowtag v{}", flowtag::VERSION);

    let result = commands::run(&cli).context("Failed to tag flow logs");

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
