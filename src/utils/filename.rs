use crate::utils::constants::OUTPUT_FILE_PREFIX;
use crate::utils::date::TargetDate;
use std::path::{Path, PathBuf};

/// Generate default CSV filename with format: canada_weather_station_data_{Y}-{M}-{D}.csv
///
/// Month and day are not zero-padded, matching files produced by earlier runs.
pub fn generate_default_csv_filename(output_dir: &Path, date: &TargetDate) -> PathBuf {
    let filename = format!(
        "{}_{}-{}-{}.csv",
        OUTPUT_FILE_PREFIX, date.year, date.month, date.day
    );
    output_dir.join(filename)
}
