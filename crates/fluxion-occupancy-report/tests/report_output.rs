// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use chrono::NaiveDate;
use fluxion_occupancy::{SimulationConfig, SimulationEngine};
use fluxion_occupancy_report::ReportWriter;
use fluxion_occupancy_report::cli::{OutputConfig, RunConfig};
use fluxion_occupancy_report::output::{DAILY_CHART, DETAILED_CSV, ROLLING_CHART, SUMMARY_CSV};

#[test]
fn default_run_writes_all_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("resultados_iot");
    let result = SimulationEngine::run(&SimulationConfig::default()).unwrap();

    let files = ReportWriter::new(&dir).write(&result).unwrap();

    assert_eq!(files.detailed_csv, dir.join(DETAILED_CSV));
    assert_eq!(files.summary_csv, dir.join(SUMMARY_CSV));
    assert_eq!(files.rolling_chart, Some(dir.join(ROLLING_CHART)));
    assert_eq!(files.daily_chart, Some(dir.join(DAILY_CHART)));
    for path in [
        &files.detailed_csv,
        &files.summary_csv,
        &dir.join(ROLLING_CHART),
        &dir.join(DAILY_CHART),
    ] {
        assert!(path.exists(), "{} missing", path.display());
    }
}

#[test]
fn detailed_csv_has_one_row_per_hour() {
    let tmp = tempfile::tempdir().unwrap();
    let result = SimulationEngine::run(&SimulationConfig::default()).unwrap();
    let files = ReportWriter::new(tmp.path())
        .with_charts(false)
        .write(&result)
        .unwrap();

    let mut reader = csv::Reader::from_path(&files.detailed_csv).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "timestamp",
            "kwh_estimated",
            "presence",
            "consumption_w",
            "consumption_after_w",
            "kwh_before",
            "kwh_after"
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 720);
    assert_eq!(&rows[0][0], "2024-09-01 00:00:00");
    assert_eq!(&rows[719][0], "2024-09-30 23:00:00");

    let total_before: f64 = rows.iter().map(|r| r[5].parse::<f64>().unwrap()).sum();
    assert!((total_before - 800.0).abs() < 1e-6);
    assert!(rows.iter().all(|r| &r[2] == "0" || &r[2] == "1"));
}

#[test]
fn summary_csv_matches_result() {
    let tmp = tempfile::tempdir().unwrap();
    let result = SimulationEngine::run(&SimulationConfig::default()).unwrap();
    let files = ReportWriter::new(tmp.path())
        .with_charts(false)
        .write(&result)
        .unwrap();

    let mut reader = csv::Reader::from_path(&files.summary_csv).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(&row[0], "Sudeste");
    assert_eq!(&row[1], "Comercial");
    assert_eq!(&row[2], "2024-09");

    let savings_kwh: f64 = row[5].parse().unwrap();
    let savings_co2: f64 = row[6].parse().unwrap();
    let savings_reais: f64 = row[7].parse().unwrap();
    assert!((savings_kwh - result.summary.savings_kwh).abs() < 1e-9);
    assert!((savings_co2 - savings_kwh * 0.1).abs() < 1e-9);
    assert!((savings_reais - savings_kwh * 0.8).abs() < 1e-9);
}

#[test]
fn charts_can_be_disabled_from_config() {
    let tmp = tempfile::tempdir().unwrap();
    let output = OutputConfig {
        dir: tmp.path().to_string_lossy().into_owned(),
        charts: false,
        ..OutputConfig::default()
    };
    let result = SimulationEngine::run(&SimulationConfig::default()).unwrap();

    let files = ReportWriter::from_config(&output).write(&result).unwrap();

    assert!(files.rolling_chart.is_none());
    assert!(files.daily_chart.is_none());
    assert!(!tmp.path().join(ROLLING_CHART).exists());
}

#[test]
fn empty_range_writes_headers_and_zero_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let config = SimulationConfig {
        start_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        ..SimulationConfig::default()
    };
    let result = SimulationEngine::run(&config).unwrap();

    let files = ReportWriter::new(tmp.path()).write(&result).unwrap();

    assert!(files.rolling_chart.is_none());
    assert!(files.daily_chart.is_none());

    let detailed = std::fs::read_to_string(&files.detailed_csv).unwrap();
    assert_eq!(detailed.lines().count(), 1);

    let mut reader = csv::Reader::from_path(&files.summary_csv).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(row[5].parse::<f64>().unwrap(), 0.0);
}

#[test]
fn writing_twice_into_existing_directory_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    let result = SimulationEngine::run(&SimulationConfig::default()).unwrap();
    let writer = ReportWriter::new(tmp.path()).with_charts(false);

    writer.write(&result).unwrap();
    writer.write(&result).unwrap();
}

#[test]
fn unwritable_output_directory_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    std::fs::write(&blocker, "occupied").unwrap();
    let result = SimulationEngine::run(&SimulationConfig::default()).unwrap();

    let err = ReportWriter::new(blocker.join("out"))
        .write(&result)
        .unwrap_err();

    assert!(err.to_string().contains("Failed to create output directory"));
}

#[test]
fn config_file_drives_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("office.toml");
    std::fs::write(
        &config_path,
        r#"
[simulation]
region = "Nordeste"
start_date = "2024-09-02"
end_date = "2024-09-06"
seed = 7

[output]
charts = false
"#,
    )
    .unwrap();

    let config = RunConfig::from_file(config_path.to_str().unwrap()).unwrap();
    let result = SimulationEngine::run(&config.simulation).unwrap();

    assert_eq!(result.records.len(), 5 * 24);
    assert_eq!(result.summary.region, "Nordeste");
    assert!((result.summary.total_before_kwh - 800.0).abs() < 1e-6);
    assert!(!config.output.charts);
}
