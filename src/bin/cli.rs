// src/bin/cli.rs
use clap::Parser;
use pbp_recon::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli::log_filter(args.verbose)))
        .format_timestamp(None)
        .init();

    cli::run(args)?;
    Ok(())
}
