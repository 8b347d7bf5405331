use clap::Parser;
use std::process::ExitCode;

use archyl_release::{ActionSink, Args, execute, result::Result};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("archyl_release")
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
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    let sink = ActionSink::new(args.output_file.clone());

    // required inputs are checked before anything else runs
    execute(&args, &sink).await;

    if sink.failed() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
