pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod scrape;
pub mod settings;
pub mod source;
pub mod utils;
pub mod writers;

pub use error::{ExportError, Result};
