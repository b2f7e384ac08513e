use lbv_toolbox::logging::{parse_level, LoggerError};
use log::LevelFilter;

#[test]
fn log_levels_parse_case_insensitively() {
    assert_eq!(parse_level("warn").unwrap(), LevelFilter::Warn);
    assert_eq!(parse_level(" DEBUG ").unwrap(), LevelFilter::Debug);
    assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
}

#[test]
fn unknown_level_is_rejected() {
    let err = parse_level("loud").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidLevel(ref s) if s == "loud"), "{err}");
}
