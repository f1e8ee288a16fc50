use clap::Parser;
use color_eyre::eyre::Result;

use crate::{app::App, cli::Cli};

mod action;
mod app;
mod cli;
mod components;
mod config;
mod counters;
mod errors;
mod logging;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    crate::errors::init()?;
    crate::logging::init()?;

    let args = Cli::parse();
    let mut app = App::new(args.tick_rate, args.frame_rate)?;
    app.run().await?;

    Ok(())
}
