use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use flate2::read::MultiGzDecoder;
use tracing::{debug, info};

use crate::consts::VARIANT_COLUMN;
use crate::error::{Result, VariantListError};

/// Layout of a variant list file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantListFormat {
    /// Delimited text, optionally gzip-compressed.
    Delimited { delimiter: u8, gzipped: bool },
    /// Spreadsheet workbook; the first worksheet is read.
    Workbook,
}

impl VariantListFormat {
    ///
    /// Determine the format of a variant list based on its extension.
    /// # Arguments
    /// * `path` - path to the variant list
    /// # Returns
    /// * `VariantListFormat` - delimiter and compression of the file, or a workbook
    ///
    pub fn from_path(path: &Path) -> Result<Self> {
        let unsupported = || VariantListError::UnsupportedFormat(path.display().to_string());

        let (extension, gzipped) = match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => {
                let file_stem = path.file_stem().ok_or_else(unsupported)?;
                let inner = Path::new(file_stem)
                    .extension()
                    .and_then(OsStr::to_str)
                    .ok_or_else(unsupported)?;
                (inner.to_ascii_lowercase(), true)
            }
            Some(ext) => (ext.to_ascii_lowercase(), false),
            None => return Err(unsupported()),
        };

        let delimiter = match extension.as_str() {
            "csv" => b',',
            "tsv" | "txt" => b'\t',
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" if !gzipped => {
                return Ok(VariantListFormat::Workbook);
            }
            _ => return Err(unsupported()),
        };

        Ok(VariantListFormat::Delimited { delimiter, gzipped })
    }
}

///
/// Read the variant identifiers from the `SNP` column of a variant list.
///
/// Order and duplicates are kept; blank cells are skipped.
///
/// # Arguments
/// - path: path to a spreadsheet (`.xlsx`, `.xls`, `.ods`, first worksheet), or a
///   `.csv`, `.tsv` or `.txt` file, optionally gzipped
///
pub fn read_variant_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let format = VariantListFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "reading variant list");

    let variants = match format {
        VariantListFormat::Workbook => read_variants_from_workbook(path)?,
        VariantListFormat::Delimited { delimiter, gzipped } => {
            let file = File::open(path)?;
            let reader: Box<dyn Read> = if gzipped {
                Box::new(MultiGzDecoder::new(file))
            } else {
                Box::new(file)
            };
            read_variants_from_reader(BufReader::new(reader), delimiter)?
        }
    };

    info!(
        path = %path.display(),
        count = variants.len(),
        "generated a list of variants"
    );
    Ok(variants)
}

/// Same as [`read_variant_list`], from any delimited reader.
pub fn read_variants_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let column = find_variant_column(reader.headers()?.iter())?;

    let mut variants = Vec::new();
    for record in reader.records() {
        let record = record?;
        push_variant(&mut variants, record.get(column));
    }

    finish(variants)
}

/// Same as [`read_variant_list`], from the first worksheet of a workbook.
pub fn read_variants_from_workbook(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| VariantListError::NoWorksheet(path.display().to_string()))??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let column = find_variant_column(header.iter().map(String::as_str))?;

    let mut variants = Vec::new();
    for row in rows {
        let cell = row.get(column).map(cell_text);
        push_variant(&mut variants, cell.as_deref());
    }

    finish(variants)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn find_variant_column<'a, I: Iterator<Item = &'a str>>(headers: I) -> Result<usize> {
    headers
        .map(|header| header.trim().trim_start_matches('\u{feff}'))
        .position(|header| header == VARIANT_COLUMN)
        .ok_or_else(|| VariantListError::MissingColumn(VARIANT_COLUMN.to_string()))
}

fn push_variant(variants: &mut Vec<String>, cell: Option<&str>) {
    if let Some(variant) = cell.map(str::trim).filter(|v| !v.is_empty()) {
        variants.push(variant.to_string());
    }
}

fn finish(variants: Vec<String>) -> Result<Vec<String>> {
    if variants.is_empty() {
        return Err(VariantListError::EmptyList);
    }
    Ok(variants)
}
