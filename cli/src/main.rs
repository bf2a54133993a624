use clap::Parser;
use crosswordle::{args::Args, config, logging};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_dir = if args.full_screen() {
        Some(config::app_dir()?)
    } else {
        None
    };
    logging::init(log_dir.as_deref())?;

    crosswordle::run(args).await
}
