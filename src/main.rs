use clap::Parser;

use nudge::{cli, notifier::NotifierClient};

fn initialize_logger(debug: bool) -> nudge::Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("nudge")
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
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let config = cli_args.get_config()?;

    let client = NotifierClient::from_config(config)?;

    client.run().await?;

    Ok(())
}
