use crate::utils::date::TargetDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "station-export")]
#[command(about = "Export metadata for every active Environment Canada weather station")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Configuration file [default: station-export.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

/// Options shared by every command that talks to the climate service.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[arg(
        short,
        long,
        help = "Observation date, YYYY-MM-DD [default: yesterday in PST]"
    )]
    pub date: Option<TargetDate>,

    #[arg(long, help = "Climate service base URL")]
    pub host: Option<String>,

    #[arg(long, help = "Stations requested per search page")]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export every station with data on the date to CSV
    Export {
        #[command(flatten)]
        query: QueryArgs,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: canada_weather_station_data_{Y}-{M}-{D}.csv]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Directory for the default output file")]
        output_dir: Option<PathBuf>,

        #[arg(short = 'n', long, help = "Stop after this many stations")]
        limit: Option<usize>,

        #[arg(short, long, help = "Hide the progress spinner")]
        quiet: bool,
    },

    /// Print the id of every station with data on the date
    List {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Fetch and print one station's metadata
    Show {
        station_id: String,

        #[command(flatten)]
        query: QueryArgs,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}
