use crate::utils::constants::{DETAIL_PATH, SEARCH_PATH, SEARCH_START_YEAR};
use crate::utils::date::TargetDate;

/// URL of one page of the historical station search, filtered to stations
/// with data on `date`.
pub fn search_url(host: &str, date: &TargetDate, page_size: usize, offset: usize) -> String {
    format!(
        "{host}{SEARCH_PATH}?searchType=stnProv&timeframe=1&lstProvince=\
         &StartYear={SEARCH_START_YEAR}&EndYear={year}&optLimit=specDate\
         &Year={year}&Month={month}&Day={day}&selRowPerPage={page_size}&startRow={offset}",
        host = host.trim_end_matches('/'),
        year = date.year,
        month = date.month,
        day = date.day,
    )
}

/// URL of a station's daily-data page, which carries its metadata.
pub fn detail_url(host: &str, station_id: &str, date: &TargetDate) -> String {
    format!(
        "{host}{DETAIL_PATH}?&StationID={station_id}&Prov=&urlExtension=_e.html\
         &searchType=stnProv&optLimit=specDate&StartYear={SEARCH_START_YEAR}&EndYear={year}\
         &selRowPerPage=100&Line=2&Month={month}&Day={day}&lstProvince=&timeframe=2&Year={year}",
        host = host.trim_end_matches('/'),
        year = date.year,
        month = date.month,
        day = date.day,
    )
}
