pub mod detail;
pub mod enumerator;
pub mod extract;
pub mod urls;

pub use detail::{fetch_station_details, parse_station_details};
pub use enumerator::{enumerate_stations, parse_search_page, StationEnumerator};
pub use extract::{LabeledField, LABELED_FIELDS};
