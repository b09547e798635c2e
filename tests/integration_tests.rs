use climate_station_export::models::StationRecord;
use climate_station_export::processors::Exporter;
use climate_station_export::scrape::urls::{detail_url, search_url};
use climate_station_export::settings::ExportConfig;
use climate_station_export::source::StaticSource;
use climate_station_export::utils::{generate_default_csv_filename, TargetDate};
use climate_station_export::writers::StationCsvWriter;
use climate_station_export::ExportError;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const HOST: &str = "http://mock.climate";

fn date() -> TargetDate {
    TargetDate::new(2021, 1, 14).unwrap()
}

fn config() -> ExportConfig {
    ExportConfig {
        host: HOST.to_string(),
        ..ExportConfig::default()
    }
}

fn search_page(ids: &[&str]) -> String {
    let forms: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<form action="/climate_data/interform_e.html" method="post">
                     <input type="hidden" name="StationID" value="{id}">
                   </form>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><main><div class="historical-data-results">{forms}</div></main></body></html>"#
    )
}

fn detail_page(name: &str, province: &str, climate_id: &str) -> String {
    format!(
        r#"<html><body>
           <p class="table-header">{name}<br>{province}</p>
           <div aria-labelledby="latitude"> 60°42'34.000" N</div>
           <div aria-labelledby="longitude"> 135°04'06.000" W</div>
           <div aria-labelledby="elevation"> 706.20 m</div>
           <div aria-labelledby="climateid"> {climate_id}</div>
           <div aria-labelledby="wmoid"> 71964</div>
           <div aria-labelledby="tcid"> YXY</div>
           </body></html>"#
    )
}

fn two_station_source() -> StaticSource {
    StaticSource::new()
        .with_page(search_url(HOST, &date(), 100, 0), search_page(&["1617", "48168"]))
        .with_page(
            search_url(HOST, &date(), 100, 100),
            "<html><body>No results</body></html>",
        )
        .with_page(
            detail_url(HOST, "1617", &date()),
            detail_page("WHITEHORSE A", "YUKON", "2101300"),
        )
        .with_page(
            detail_url(HOST, "48168", &date()),
            detail_page("WHITEHORSE AUTO", "YUKON", "2101310"),
        )
}

#[test]
fn test_end_to_end_export() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = generate_default_csv_filename(temp_dir.path(), &date());

    let source = two_station_source();
    let exporter = Exporter::new(&source, &config(), date());
    let mut sink = StationCsvWriter::create(&output_path).unwrap();
    let summary = exporter.run(&mut sink, None).unwrap();
    drop(sink);

    assert_eq!(summary.stations_written, 2);
    assert!(output_path.ends_with("canada_weather_station_data_2021-1-14.csv"));

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, StationRecord::FIELD_NAMES.to_vec());

    let records: Vec<StationRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].station_id, "1617");
    assert_eq!(records[0].detail_url, detail_url(HOST, "1617", &date()));
    assert_eq!(records[0].name, "WHITEHORSE A");
    assert_eq!(records[0].province, "YUKON");
    assert_eq!(records[0].latitude, "60°42'34.000\" N");
    assert_eq!(records[0].elevation, "706.20 m");
    assert_eq!(records[0].climate_id, "2101300");
    assert_eq!(records[0].tc_id, "YXY");

    assert_eq!(records[1].station_id, "48168");
    assert_eq!(records[1].name, "WHITEHORSE AUTO");
    assert_eq!(records[1].climate_id, "2101310");
}

#[test]
fn test_search_failure_leaves_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("stations.csv");

    let source = StaticSource::new().with_status(search_url(HOST, &date(), 100, 0), 502);
    let exporter = Exporter::new(&source, &config(), date());
    let mut sink = StationCsvWriter::create(&output_path).unwrap();

    let result = exporter.run(&mut sink, None);
    drop(sink);

    assert!(matches!(result, Err(ExportError::Status { status: 502, .. })));
    assert_eq!(source.requests().len(), 1);
    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "");
}

#[test]
fn test_unavailable_date_is_reported() {
    let source = StaticSource::new().with_page(
        search_url(HOST, &date(), 100, 0),
        "<html><body><p>Sorry, the data you requested is not available.</p></body></html>",
    );
    let exporter = Exporter::new(&source, &config(), date());
    let mut sink = StationCsvWriter::new(Vec::new());

    let result = exporter.run(&mut sink, None);
    assert!(matches!(result, Err(ExportError::DataUnavailable { .. })));
    assert_eq!(sink.rows_written(), 0);
}

#[test]
fn test_missing_detail_field_aborts_export() {
    let broken = detail_page("WHITEHORSE AUTO", "YUKON", "2101310")
        .replace(r#"<div aria-labelledby="wmoid"> 71964</div>"#, "");
    let source = two_station_source().with_page(detail_url(HOST, "48168", &date()), broken);
    let exporter = Exporter::new(&source, &config(), date());
    let mut sink = StationCsvWriter::new(Vec::new());

    let result = exporter.run(&mut sink, None);
    match result {
        Err(ExportError::Extraction { field, .. }) => assert_eq!(field, "wmoid"),
        other => panic!("expected extraction error, got {:?}", other),
    }
    assert_eq!(sink.rows_written(), 1);
}
