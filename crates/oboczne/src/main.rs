use anyhow::Result;
use clap::Parser;

use oboczne::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    dispatch(args.command)
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            dictionary,
            document,
            output,
            format,
            min_found,
            parse,
        } => cli::analyze::run(
            &dictionary,
            &document,
            output.as_deref(),
            format,
            &cli::analysis_options(min_found, parse),
        ),
        Commands::Groups { dictionary, parse } => {
            cli::groups::run(&dictionary, &parse.options())
        }
    }
}
