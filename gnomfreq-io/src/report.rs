use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use gnomfreq_core::{ResolutionResult, ResultSink};

use crate::consts::{REPORT_FILE_NAME, REPORT_HEADER};

/// Path of the report inside an output directory.
pub fn report_path<P: AsRef<Path>>(output_dir: P) -> PathBuf {
    output_dir.as_ref().join(REPORT_FILE_NAME)
}

///
/// Tab-separated frequency report. The header is written once, when the writer
/// is created; every result is appended as one row and flushed right away so a
/// run that dies halfway still leaves its finished rows on disk.
///
pub struct ReportWriter<W: Write> {
    inner: W,
    rows: usize,
}

impl ReportWriter<BufWriter<File>> {
    ///
    /// Create (or truncate) the report in `output_dir` and write its header.
    ///
    /// # Arguments
    /// - output_dir: directory to hold the report; created if missing
    ///
    pub fn create<P: AsRef<Path>>(output_dir: P) -> io::Result<Self> {
        let output_dir = output_dir.as_ref();
        create_dir_all(output_dir)?;

        let file = File::create(report_path(output_dir))?;
        ReportWriter::new(BufWriter::new(file))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{}", REPORT_HEADER)?;
        inner.flush()?;
        Ok(ReportWriter { inner, rows: 0 })
    }

    pub fn write_result(&mut self, result: &ResolutionResult) -> io::Result<()> {
        writeln!(self.inner, "{}", result.to_row())?;
        self.inner.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far, header excluded.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ResultSink for ReportWriter<W> {
    fn record(&mut self, result: &ResolutionResult) -> io::Result<()> {
        self.write_result(result)
    }
}
