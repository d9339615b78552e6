use std::fs;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use gnomfreq_core::{DataCategory, Resolution, ResolutionResult, ResultSink};
use gnomfreq_io::{REPORT_HEADER, ReportWriter, VariantListError, read_variant_list, report_path};

#[fixture]
fn tempdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn unavailable(variant: &str) -> ResolutionResult {
    ResolutionResult::new(
        variant,
        Resolution::PopulationUnavailable {
            category: DataCategory::Genome,
        },
    )
}

#[rstest]
fn test_report_is_truncated_on_create(tempdir: TempDir) {
    let output = tempdir.path().join("nested/out");

    {
        let mut writer = ReportWriter::create(&output).unwrap();
        writer.record(&unavailable("old1")).unwrap();
        writer.record(&unavailable("old2")).unwrap();
    }
    {
        let mut writer = ReportWriter::create(&output).unwrap();
        writer.record(&unavailable("new")).unwrap();
    }

    let text = fs::read_to_string(report_path(&output)).unwrap();
    assert_eq!(text, format!("{REPORT_HEADER}\nnew\tgenome\tN/A\tN/A\n"));
    assert_eq!(text.matches(REPORT_HEADER).count(), 1);
}

#[rstest]
fn test_rows_are_on_disk_before_drop(tempdir: TempDir) {
    let mut writer = ReportWriter::create(tempdir.path()).unwrap();
    writer.record(&unavailable("v1")).unwrap();

    let text = fs::read_to_string(report_path(tempdir.path())).unwrap();
    assert!(text.ends_with("v1\tgenome\tN/A\tN/A\n"));
}

#[rstest]
fn test_read_csv_variant_list(tempdir: TempDir) {
    let path = tempdir.path().join("variants.csv");
    fs::write(&path, "SNP,Gene\nrs429358,APOE\nrs7412,APOE\n").unwrap();

    assert_eq!(read_variant_list(&path).unwrap(), vec!["rs429358", "rs7412"]);
}

#[rstest]
fn test_read_gzipped_tsv_variant_list(tempdir: TempDir) {
    let path = tempdir.path().join("variants.tsv.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder
        .write_all(b"Gene\tSNP\nPCSK9\t1-55516888-G-GA\nAPOE\t19-44908684-T-C\n")
        .unwrap();
    encoder.finish().unwrap();

    assert_eq!(
        read_variant_list(&path).unwrap(),
        vec!["1-55516888-G-GA", "19-44908684-T-C"]
    );
}

#[rstest]
fn test_missing_variant_file(tempdir: TempDir) {
    let path = tempdir.path().join("absent.csv");
    assert!(read_variant_list(&path).is_err());
}

/// Two-sheet workbook: variants on the first sheet, noise on the second.
fn write_workbook(path: &std::path::Path, rows: &[(&str, &str)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Gene").unwrap();
    sheet.write_string(0, 1, "SNP").unwrap();
    for (i, (gene, snp)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *gene).unwrap();
        if !snp.is_empty() {
            sheet.write_string(row, 1, *snp).unwrap();
        }
    }

    let other = workbook.add_worksheet();
    other.write_string(0, 0, "SNP").unwrap();
    other.write_string(1, 0, "rs_other_sheet").unwrap();

    workbook.save(path).unwrap();
}

#[rstest]
fn test_read_xlsx_variant_list(tempdir: TempDir) {
    let path = tempdir.path().join("variant_test_freq.xlsx");
    write_workbook(
        &path,
        &[
            ("APOE", " rs429358 "),
            ("PCSK9", ""),
            ("PCSK9", "1-55516888-G-GA"),
            ("APOE", "rs429358"),
        ],
    );

    assert_eq!(
        read_variant_list(&path).unwrap(),
        vec!["rs429358", "1-55516888-G-GA", "rs429358"]
    );
}

#[rstest]
fn test_xlsx_without_snp_column(tempdir: TempDir) {
    let path = tempdir.path().join("variants.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "rsid").unwrap();
    sheet.write_string(1, 0, "rs1").unwrap();
    workbook.save(&path).unwrap();

    let err = read_variant_list(&path).unwrap_err();
    assert!(matches!(err, VariantListError::MissingColumn(col) if col == "SNP"));
}
