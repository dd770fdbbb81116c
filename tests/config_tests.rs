use travelsum::config::{Columns, Config};
use travelsum::core::calendar::RangeMode;

#[test]
fn test_default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.columns, Columns::default());
    assert_eq!(cfg.columns.date, 0);
    assert_eq!(cfg.columns.mode, 2);
    assert_eq!(cfg.columns.duration, 4);
    assert_eq!(cfg.columns.distance, 5);
    assert_eq!(cfg.header_rows, 1);
    assert_eq!(cfg.output_suffix, "-result");
    assert_eq!(cfg.calendar_range, RangeMode::Insertion);
    assert_eq!(cfg.sheet, None);
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml(
        "calendar_range: chronological\ncolumns:\n  distance: 7\nsheet: Trips\n",
    )
    .unwrap();
    assert_eq!(cfg.calendar_range, RangeMode::Chronological);
    assert_eq!(cfg.columns.distance, 7);
    assert_eq!(cfg.columns.mode, 2);
    assert_eq!(cfg.sheet.as_deref(), Some("Trips"));
    assert_eq!(cfg.output_suffix, "-result");
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(Config::from_yaml("calendar_range: sideways\n").is_err());
    assert!(Config::from_yaml("columns: [1, 2").is_err());
}

#[test]
fn test_yaml_round_trip() {
    let mut cfg = Config::default();
    cfg.output_suffix = "-summary".into();
    let yaml = cfg.to_yaml().unwrap();
    assert!(yaml.contains("calendar_range: insertion"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), cfg);
}
