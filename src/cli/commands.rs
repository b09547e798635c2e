use crate::cli::args::{Cli, Commands, QueryArgs};
use crate::error::Result;
use crate::processors::Exporter;
use crate::scrape::{enumerate_stations, fetch_station_details};
use crate::settings::{ConfigOverrides, ExportConfig};
use crate::source::HttpSource;
use crate::utils::date::TargetDate;
use crate::utils::filename::generate_default_csv_filename;
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;
use crate::writers::StationCsvWriter;
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Export {
            query,
            output_file,
            output_dir,
            limit,
            quiet,
        } => {
            let config = load_config(cli.config.as_deref(), &query, output_dir)?;
            let date = query.date.unwrap_or_else(TargetDate::yesterday);
            let output_file = output_file
                .unwrap_or_else(|| generate_default_csv_filename(&config.output_dir, &date));

            println!("Exporting stations with data on {}", date);
            println!("Host: {}", config.base_url());
            println!("Writing {}", output_file.display());

            let source = HttpSource::new(&config)?;
            let exporter = Exporter::new(source, &config, date).with_limit(limit);
            let mut sink = StationCsvWriter::create(&output_file)?;

            let progress = ProgressReporter::new_spinner("Fetching stations...", quiet);
            let summary = exporter.run(&mut sink, Some(&progress))?;
            progress.finish_with_message("done");

            println!("\n{}", summary.summary());
            println!("All stations processed!");
        }

        Commands::List { query } => {
            let config = load_config(cli.config.as_deref(), &query, None)?;
            let date = query.date.unwrap_or_else(TargetDate::yesterday);
            let source = HttpSource::new(&config)?;

            let stations = enumerate_stations(&source, config.base_url(), date)
                .with_page_size(config.page_size);
            for station_id in stations {
                println!("{}", station_id?);
            }
        }

        Commands::Show {
            station_id,
            query,
            json,
        } => {
            let config = load_config(cli.config.as_deref(), &query, None)?;
            let date = query.date.unwrap_or_else(TargetDate::yesterday);
            let source = HttpSource::new(&config)?;

            let record = fetch_station_details(&source, &station_id, config.base_url(), &date)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", record.summary());
            }
        }
    }

    Ok(())
}

fn load_config(
    config_file: Option<&Path>,
    query: &QueryArgs,
    output_dir: Option<PathBuf>,
) -> Result<ExportConfig> {
    let overrides = ConfigOverrides {
        host: query.host.clone(),
        page_size: query.page_size,
        output_dir,
    };
    ExportConfig::load(config_file, &overrides)
}
