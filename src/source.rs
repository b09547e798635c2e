//! Access to the remote climate service.
//!
//! Everything above this module sees pages as HTML strings; only a
//! successfully fetched page ever reaches a parser.

use crate::error::{ExportError, Result};
use crate::settings::ExportConfig;
use reqwest::blocking::Client;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A source of HTML pages addressed by URL.
pub trait PageSource {
    /// Fetch `url` and return its body.
    ///
    /// A non-success status is an error, never an empty body.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP client for the live service.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &ExportConfig) -> Result<Self> {
        // None disables reqwest's 30s default: a run waits as long as the server does.
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "server returned error");
            return Err(ExportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}

/// Canned pages keyed by exact URL, for offline runs and tests.
///
/// Unknown URLs answer 404. Every requested URL is recorded in order.
#[derive(Default)]
pub struct StaticSource {
    pages: HashMap<String, (u16, String)>,
    requests: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), (200, body.into()));
        self
    }

    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.pages.insert(url.into(), (status, String::new()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageSource for StaticSource {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some((status, body)) if (200..300).contains(status) => Ok(body.clone()),
            Some((status, _)) => Err(ExportError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(ExportError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}
