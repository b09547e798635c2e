use crate::error::Result;
use crate::models::StationRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Streams station records to CSV, one flushed row at a time.
///
/// The header row comes from the first record's field names and is only
/// written once a record arrives.
pub struct StationCsvWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl StationCsvWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> StationCsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().has_headers(true).from_writer(inner),
            rows_written: 0,
        }
    }

    pub fn write_record(&mut self, record: &StationRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.to_string()).into())
    }
}
