/// Remote service
pub const DEFAULT_HOST: &str = "https://climate.weather.gc.ca";
pub const SEARCH_PATH: &str = "/historical_data/search_historic_data_stations_e.html";
pub const DETAIL_PATH: &str = "/climate_data/daily_data_e.html";

/// Earliest year accepted by the search form
pub const SEARCH_START_YEAR: i32 = 1840;

/// Pagination defaults
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Markers in response bodies
pub const DATA_UNAVAILABLE_MARKER: &str = "Sorry";
pub const REQUEST_REJECTED_MARKER: &str =
    "Your request could not be completed because an error was found";

/// Selectors and attribute names used on the search page
pub const RESULTS_SELECTOR: &str = ".historical-data-results";
pub const RESULT_ENTRY_SELECTOR: &str = "form";
pub const STATION_ID_INPUT_SELECTOR: &str = r#"input[name="StationID"]"#;

/// Selector for the name/province header on a detail page
pub const HEADER_SELECTOR: &str = "p.table-header";

/// File names
pub const OUTPUT_FILE_PREFIX: &str = "canada_weather_station_data";
pub const DEFAULT_CONFIG_FILE: &str = "station-export.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "STATION_EXPORT";

/// Hours west of UTC at which the service closes a day (PST, no DST)
pub const SERVICE_UTC_OFFSET_HOURS: i32 = -8;
