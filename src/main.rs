use clap::Parser;

mod analyzer;
mod changelog;
mod cli;
mod command;
mod exec;
mod forge;
mod git;
mod result;
mod version;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_train")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();

    initialize_logger(args.debug)?;

    let remote = args.get_remote()?;
    let forge = forge::github::Github::new(remote)?;
    let git = git::GitCli::new();
    let bumper = version::NpmBumper::new();

    let opts = command::update_branch::UpdateOptions::from_args(&args);

    command::update_branch::execute(&opts, &git, &forge, &bumper).await
}
