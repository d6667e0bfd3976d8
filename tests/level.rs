//! Tests for log level functionality.

use corrlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Fatal);
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Fatal.to_string(), "fatal");
}

#[test]
fn level_label_is_uppercase() {
    for level in Level::all() {
        assert_eq!(level.label(), level.as_str().to_uppercase());
    }
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!(" fatal ".parse::<Level>().unwrap(), Level::Fatal);
    assert_eq!("critical".parse::<Level>().unwrap(), Level::Fatal);
}

#[test]
fn level_from_str_invalid() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'verbose'");

    let converted: corrlog::Error = err.into();
    assert!(matches!(converted, corrlog::Error::InvalidLevel(ref s) if s == "verbose"));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_all_is_ascending() {
    let all = Level::all();
    assert_eq!(all.len(), 6);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}
