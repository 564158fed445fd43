//! CLI entry point for Markov chain image remixing

use clap::Parser;
use remixel::io::cli::{Cli, RemixRunner};

fn main() -> remixel::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .target(env_logger::Target::Stderr)
        .init();

    let runner = RemixRunner::new(cli);
    runner.run().map(|_| ())
}
