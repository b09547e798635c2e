use crate::error::{ExportError, Result};
use crate::scrape::extract::selector;
use crate::scrape::urls::search_url;
use crate::source::PageSource;
use crate::utils::constants::{
    DATA_UNAVAILABLE_MARKER, DEFAULT_PAGE_SIZE, REQUEST_REJECTED_MARKER, RESULTS_SELECTOR,
    RESULT_ENTRY_SELECTOR, STATION_ID_INPUT_SELECTOR,
};
use crate::utils::date::TargetDate;
use scraper::Html;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::{debug, info};

/// Start enumerating every station with data on `date`.
pub fn enumerate_stations<S: PageSource>(
    source: S,
    host: &str,
    date: TargetDate,
) -> StationEnumerator<S> {
    StationEnumerator::new(source, host, date)
}

/// Lazy sequence of station ids from the paginated station search.
///
/// Pages are requested one at a time as ids are consumed. The sequence ends
/// at the first page without a results section. The first error is yielded
/// once and nothing follows it.
pub struct StationEnumerator<S> {
    source: S,
    host: String,
    date: TargetDate,
    page_size: usize,
    offset: usize,
    pending: VecDeque<String>,
    finished: bool,
}

impl<S: PageSource> StationEnumerator<S> {
    pub fn new(source: S, host: &str, date: TargetDate) -> Self {
        Self {
            source,
            host: host.to_string(),
            date,
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Row offset of the next page to request.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Start over from the first page.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.pending.clear();
        self.finished = false;
    }

    fn fetch_page(&self) -> Result<Option<Vec<String>>> {
        let url = search_url(&self.host, &self.date, self.page_size, self.offset);
        info!(offset = self.offset, "requesting station page");
        let body = self.source.fetch(&url)?;
        parse_search_page(&body, &url)
    }
}

impl<S: PageSource> Iterator for StationEnumerator<S> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(station_id) = self.pending.pop_front() {
                return Some(Ok(station_id));
            }

            if self.finished {
                return None;
            }

            match self.fetch_page() {
                Ok(Some(ids)) if !ids.is_empty() => {
                    debug!(offset = self.offset, count = ids.len(), "stations on page");
                    self.pending.extend(ids);
                    self.offset += self.page_size;
                }
                Ok(_) => {
                    info!(offset = self.offset, "all stations processed");
                    self.finished = true;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<S: PageSource> FusedIterator for StationEnumerator<S> {}

/// Station ids on one search results page, in page order.
///
/// `Ok(None)` means the page has no results section, i.e. the search is
/// exhausted.
pub fn parse_search_page(body: &str, url: &str) -> Result<Option<Vec<String>>> {
    if body.contains(DATA_UNAVAILABLE_MARKER) {
        return Err(ExportError::DataUnavailable {
            url: url.to_string(),
        });
    }
    if body.contains(REQUEST_REJECTED_MARKER) {
        return Err(ExportError::RequestRejected {
            url: url.to_string(),
        });
    }

    let document = Html::parse_document(body);
    let results_sel = selector(RESULTS_SELECTOR, "results", url)?;
    let entry_sel = selector(RESULT_ENTRY_SELECTOR, "StationID", url)?;
    let id_sel = selector(STATION_ID_INPUT_SELECTOR, "StationID", url)?;

    let Some(results) = document.select(&results_sel).next() else {
        return Ok(None);
    };

    results
        .select(&entry_sel)
        .map(|entry| {
            entry
                .select(&id_sel)
                .next()
                .and_then(|input| input.value().attr("value"))
                .map(|value| value.trim().to_string())
                .ok_or_else(|| ExportError::extraction("StationID", url))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
