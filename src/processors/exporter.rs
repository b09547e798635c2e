use crate::error::Result;
use crate::scrape::{enumerate_stations, fetch_station_details};
use crate::settings::ExportConfig;
use crate::source::PageSource;
use crate::utils::date::TargetDate;
use crate::utils::progress::ProgressReporter;
use crate::writers::StationCsvWriter;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Drives station enumeration into detail fetching into a CSV sink.
pub struct Exporter<S> {
    source: S,
    host: String,
    date: TargetDate,
    page_size: usize,
    limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub stations_written: usize,
    pub elapsed: Duration,
}

impl ExportSummary {
    pub fn summary(&self) -> String {
        format!(
            "Stations written: {}\nElapsed: {:.1}s",
            self.stations_written,
            self.elapsed.as_secs_f64()
        )
    }
}

impl<S: PageSource> Exporter<S> {
    pub fn new(source: S, config: &ExportConfig, date: TargetDate) -> Self {
        Self {
            source,
            host: config.base_url().to_string(),
            date,
            page_size: config.page_size,
            limit: None,
        }
    }

    /// Stop after `limit` stations.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Export every enumerated station, in enumeration order.
    ///
    /// The first failure ends the run; rows already written stay flushed.
    pub fn run<W: Write>(
        &self,
        sink: &mut StationCsvWriter<W>,
        progress: Option<&ProgressReporter>,
    ) -> Result<ExportSummary> {
        let start = Instant::now();
        info!(date = %self.date, host = %self.host, "starting station export");

        let stations = enumerate_stations(&self.source, &self.host, self.date)
            .with_page_size(self.page_size)
            .take(self.limit.unwrap_or(usize::MAX));

        for station_id in stations {
            let station_id = station_id.map_err(|e| {
                warn!("station search failed: {}", e);
                e
            })?;

            let record = fetch_station_details(&self.source, &station_id, &self.host, &self.date)
                .map_err(|e| {
                    warn!(station_id = %station_id, "station details failed: {}", e);
                    e
                })?;

            sink.write_record(&record)?;
            debug!(station_id = %record.station_id, name = %record.name, "station written");

            if let Some(progress) = progress {
                progress.increment(1);
                progress.set_message(&record.name);
            }
        }

        let summary = ExportSummary {
            stations_written: sink.rows_written(),
            elapsed: start.elapsed(),
        };
        info!(stations = summary.stations_written, "export complete");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::urls::{detail_url, search_url};
    use crate::source::StaticSource;
    use crate::ExportError;

    const HOST: &str = "http://mock";

    fn config() -> ExportConfig {
        ExportConfig {
            host: HOST.to_string(),
            page_size: 2,
            ..ExportConfig::default()
        }
    }

    fn date() -> TargetDate {
        TargetDate::new(2022, 11, 5).unwrap()
    }

    fn results_page(ids: &[&str]) -> String {
        let forms: String = ids
            .iter()
            .map(|id| format!(r#"<form><input name="StationID" value="{id}"></form>"#))
            .collect();
        format!(r#"<div class="historical-data-results">{forms}</div>"#)
    }

    fn detail_page(name: &str) -> String {
        let labels = ["latitude", "longitude", "elevation", "climateid", "wmoid", "tcid"];
        let fields: String = labels
            .iter()
            .map(|l| format!(r#"<div aria-labelledby="{l}">{l}-{name}</div>"#))
            .collect();
        format!(r#"<p class="table-header">{name}<br>YUKON</p>{fields}"#)
    }

    fn source_with(ids: &[&str]) -> StaticSource {
        let mut source = StaticSource::new()
            .with_page(search_url(HOST, &date(), 2, 0), results_page(&ids[..ids.len().min(2)]))
            .with_page(search_url(HOST, &date(), 2, 2), results_page(&ids[ids.len().min(2)..]))
            .with_page(search_url(HOST, &date(), 2, 4), "<p>done</p>");
        for id in ids {
            source = source.with_page(detail_url(HOST, id, &date()), detail_page(&format!("S{}", id)));
        }
        source
    }

    #[test]
    fn test_run_streams_every_station() -> Result<()> {
        let source = source_with(&["1", "2", "3"]);
        let exporter = Exporter::new(&source, &config(), date());
        let mut sink = StationCsvWriter::new(Vec::new());

        let summary = exporter.run(&mut sink, None)?;
        assert_eq!(summary.stations_written, 3);

        let output = String::from_utf8(sink.into_inner()?).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[3].starts_with("3,"));
        assert!(lines[3].contains(",S3,YUKON,latitude-S3,"));
        Ok(())
    }

    #[test]
    fn test_limit_stops_early() -> Result<()> {
        let source = source_with(&["1", "2", "3"]);
        let exporter = Exporter::new(&source, &config(), date()).with_limit(Some(1));
        let mut sink = StationCsvWriter::new(Vec::new());

        let summary = exporter.run(&mut sink, None)?;
        assert_eq!(summary.stations_written, 1);
        // One search page and one detail page
        assert_eq!(source.requests().len(), 2);
        Ok(())
    }

    #[test]
    fn test_detail_failure_keeps_rows_already_written() {
        let source = source_with(&["1", "2"])
            .with_status(detail_url(HOST, "2", &date()), 500);
        let exporter = Exporter::new(&source, &config(), date());
        let mut sink = StationCsvWriter::new(Vec::new());

        let result = exporter.run(&mut sink, None);
        assert!(matches!(result, Err(ExportError::Status { status: 500, .. })));
        assert_eq!(sink.rows_written(), 1);
    }
}
