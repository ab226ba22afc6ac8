use chrono::{NaiveDate, TimeZone, Utc};
use std::io::Write;
use stride_risk::activity::{
    ActivityDataProvider, ActivityImportError, ActivitySource, CsvActivityImporter,
};

const EXPORT: &str = "\
Date,Steps,Source
2025-03-09,4100,device
2025-03-03,3900,device
2025-03-04,-120,manual
2025-03-05,2800,app
2025-03-05,3050,device
2025-03-06,,device
2025-03-07,4600,
2025-03-08,5100,Wearable
2025-03-02,3700,device
2025-03-10,4300,device
";

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).expect("valid date")
}

#[test]
fn importer_sanitizes_export_before_scoring() {
    let importer = CsvActivityImporter::from_reader(EXPORT.as_bytes())
        .expect("export parses")
        .with_window(None);

    let points = importer.points();
    let dates: Vec<_> = points.iter().map(|point| point.date).collect();
    assert_eq!(
        dates,
        vec![day(2), day(3), day(4), day(5), day(7), day(8), day(9), day(10)]
    );

    let clamped = points.iter().find(|point| point.date == day(4)).expect("day 4 kept");
    assert_eq!(clamped.value, 0);
    assert_eq!(clamped.source, ActivitySource::Manual);

    let duplicate = points.iter().find(|point| point.date == day(5)).expect("day 5 kept");
    assert_eq!(duplicate.value, 3050);
    assert_eq!(duplicate.source, ActivitySource::Device);

    let defaulted = points.iter().find(|point| point.date == day(7)).expect("day 7 kept");
    assert_eq!(defaulted.source, ActivitySource::Device);
}

#[test]
fn default_window_keeps_trailing_week() {
    let stamp = Utc
        .with_ymd_and_hms(2025, 3, 10, 20, 0, 0)
        .single()
        .expect("valid timestamp");
    let importer = CsvActivityImporter::from_reader(EXPORT.as_bytes())
        .expect("export parses")
        .with_last_updated(stamp);

    let series = importer.weekly_series().expect("series builds");

    assert_eq!(series.len(), 7);
    assert_eq!(series.first_date(), Some(day(3)));
    assert_eq!(series.last_date(), Some(day(10)));
    assert_eq!(series.last_updated, stamp);
    let expected = (3900 + 0 + 3050 + 4600 + 5100 + 4100 + 4300) as f64 / 7.0;
    assert!((series.average_steps() - expected).abs() < 1e-9);
}

#[test]
fn invalid_dates_report_their_line() {
    let csv = "Date,Steps\n2025-03-01,1200\nlast tuesday,900\n";

    match CsvActivityImporter::from_reader(csv.as_bytes()) {
        Err(ActivityImportError::InvalidDate { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "last tuesday");
        }
        other => panic!("expected invalid date, got {other:?}"),
    }
}

#[test]
fn unknown_sources_are_rejected() {
    let csv = "Date,Steps,Source\n2025-03-01,1200,pedometer-ish\n";

    assert!(matches!(
        CsvActivityImporter::from_reader(csv.as_bytes()),
        Err(ActivityImportError::InvalidSource { line: 2, .. })
    ));
}

#[test]
fn non_numeric_steps_surface_as_csv_errors() {
    let csv = "Date,Steps\n2025-03-01,many\n";

    assert!(matches!(
        CsvActivityImporter::from_reader(csv.as_bytes()),
        Err(ActivityImportError::Csv(_))
    ));
}

#[test]
fn reads_exports_from_disk() {
    let path = std::env::temp_dir().join(format!("stride-risk-import-{}.csv", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("temp file created");
        file.write_all(EXPORT.as_bytes()).expect("export written");
    }

    let importer = CsvActivityImporter::from_path(&path).expect("export loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(importer.points().len(), 8);
}

#[test]
fn missing_files_are_io_errors() {
    let path = std::env::temp_dir().join("stride-risk-definitely-missing.csv");
    assert!(matches!(
        CsvActivityImporter::from_path(path),
        Err(ActivityImportError::Io(_))
    ));
}
