//! Integration tests for the dataset stack

use std::io::Write;

use chrono::NaiveDate;
use dataset_facade::{
    filter_table, open_repository, DatasetConfig, DatasetConfigBuilder, DatasetError, Selection,
};
use tempfile::NamedTempFile;

fn sample_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "refArea,refPeriod,Number of cases,Observation URI").unwrap();
    writeln!(file, "http://linked.aub.edu.lb/pkgcube/resource/Beirut,01-2020,10,o1").unwrap();
    writeln!(file, "http://linked.aub.edu.lb/pkgcube/resource/Beirut,02-2020,20,o2").unwrap();
    writeln!(file, "http://linked.aub.edu.lb/pkgcube/resource/Mount_Lebanon,02-2020,7,o3").unwrap();
    writeln!(file, "http://linked.aub.edu.lb/pkgcube/resource/North,11-2019,,o4").unwrap();
    writeln!(file, "badformat,03-2020,4,o5").unwrap();
    writeln!(file, "http://linked.aub.edu.lb/pkgcube/resource/Akkar,2019,2,o6").unwrap();
    writeln!(file, "http://linked.aub.edu.lb/pkgcube/resource/Akkar,06-2019,2,o7").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_keeps_only_fully_derived_rows() {
    let file = sample_csv();
    let repo = open_repository(&DatasetConfig::new(file.path())).unwrap();
    let table = repo.table();

    assert_eq!(repo.raw_count(), 7);
    assert_eq!(table.len(), 4);
    assert_eq!(repo.dropped_count(), 3);
    assert_eq!(table.governorates(), vec!["Akkar", "Beirut", "Mount Lebanon"]);
    assert_eq!(table.years(), vec!["2019", "2020"]);
}

#[test]
fn test_two_row_scenario() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "refArea,refPeriod,Number of cases").unwrap();
    writeln!(file, "http://x/resource/Beirut,01-2020,10").unwrap();
    writeln!(file, "http://x/resource/Beirut,02-2020,20").unwrap();
    file.flush().unwrap();

    let repo = open_repository(&DatasetConfig::new(file.path())).unwrap();
    let table = repo.table();

    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|r| r.governorate == "Beirut"));
    assert_eq!(table.records()[0].date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(table.records()[1].date, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
}

#[test]
fn test_filter_after_load() {
    let file = sample_csv();
    let repo = open_repository(&DatasetConfig::new(file.path())).unwrap();
    let table = repo.table();

    let beirut_2020 = filter_table(&table, &Selection::new(["2020"], ["Beirut"]));
    assert_eq!(beirut_2020.total_cases(), 30.0);

    let nothing = filter_table(&table, &Selection::new(["1990"], table.governorates()));
    assert!(nothing.is_empty());
    assert_eq!(nothing.total_cases(), 0.0);
}

#[test]
fn test_builder_config_with_renamed_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "area,period,count").unwrap();
    writeln!(file, "http://x/resource/South,09-2018,3").unwrap();
    file.flush().unwrap();

    let config = DatasetConfigBuilder::new()
        .path(file.path())
        .area_column("area")
        .period_column("period")
        .cases_column("count")
        .build()
        .unwrap();

    let repo = open_repository(&config).unwrap();
    assert_eq!(repo.table().records()[0].governorate, "South");
}

#[test]
fn test_missing_file_is_fatal() {
    let err = open_repository(&DatasetConfig::new("/nonexistent/Dysentery_data.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::FileNotFound(_)));
}
