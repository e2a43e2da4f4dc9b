use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod core;
mod parsing;
mod pipeline;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if args.verbose {
        EnvFilter::new("amr_hierarchy=debug,info")
    } else {
        EnvFilter::new("amr_hierarchy=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::build::run(&args)
}
