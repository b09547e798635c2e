use crate::error::{ExportError, Result};
use crate::models::StationRecord;
use crate::scrape::extract::{header_name_and_province, labeled_text, LABELED_FIELDS};
use crate::scrape::urls::detail_url;
use crate::source::PageSource;
use crate::utils::date::TargetDate;
use scraper::Html;
use tracing::debug;

/// Fetch a station's detail page and extract its metadata.
pub fn fetch_station_details<S: PageSource>(
    source: S,
    station_id: &str,
    host: &str,
    date: &TargetDate,
) -> Result<StationRecord> {
    let url = detail_url(host, station_id, date);
    debug!(station_id, url = %url, "fetching station details");
    let body = source.fetch(&url)?;
    parse_station_details(station_id, &url, &body)
}

/// Build a record from the HTML of a station's detail page.
pub fn parse_station_details(station_id: &str, url: &str, html: &str) -> Result<StationRecord> {
    let document = Html::parse_document(html);
    let (name, province) = header_name_and_province(&document, url)?;

    let mut record = StationRecord {
        station_id: station_id.to_string(),
        detail_url: url.to_string(),
        name,
        province,
        ..StationRecord::default()
    };

    for field in LABELED_FIELDS.iter() {
        let value = labeled_text(&document, field.label, url)?;
        let slot = record
            .column_mut(field.column)
            .ok_or_else(|| ExportError::extraction(field.column, url))?;
        *slot = value;
    }

    Ok(record)
}
