use anyhow::Context;
use clap::Parser;
use climate_station_export::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("station export failed")
}
