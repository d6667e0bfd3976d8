//! Tests for the `log` crate adapter.
#![cfg(feature = "log")]

use corrlog::backend::LogBackend;
use corrlog::{Facade, Level, LogOutcome, LogRequest};
use std::error::Error;
use std::fmt;
use std::sync::Mutex;

struct Captured {
    records: Mutex<Vec<(log::Level, String, String)>>,
}

impl log::Log for Captured {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        !metadata.target().starts_with("muted")
    }

    fn log(&self, record: &log::Record<'_>) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

#[derive(Debug)]
struct Layer(&'static str, Option<Box<Layer>>);

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.1.as_deref().map(|s| s as &(dyn Error + 'static))
    }
}

static LOGGER: Captured = Captured {
    records: Mutex::new(Vec::new()),
};

#[test]
fn forwards_to_installed_logger() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Info);

    let facade = Facade::builder().backend(LogBackend::new()).build();

    let outcome = facade.fatal(LogRequest::new().message("down").caller("svc.main"));
    assert!(outcome.is_emitted());
    assert_eq!(
        facade.debug(LogRequest::new().message("chatty").caller("svc.main")),
        LogOutcome::SkippedBelowThreshold
    );
    assert_eq!(
        facade.error(LogRequest::new().message("x").caller("muted.svc")),
        LogOutcome::SkippedBelowThreshold
    );

    let err = Layer(
        "request failed",
        Some(Box::new(Layer(
            "timeout",
            Some(Box::new(Layer("socket closed", None))),
        ))),
    );
    let chained = facade.error(LogRequest::new().error(&err).caller("svc.net"));
    assert!(chained.is_emitted());

    let records = LOGGER.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    let (level, target, text) = &records[0];
    assert_eq!(*level, log::Level::Error);
    assert_eq!(target, "svc.main");
    assert_eq!(
        text,
        &format!("[{}] [svc.main] [down]", outcome.correlation_id().unwrap())
    );
    assert_eq!(
        records[1].2,
        format!(
            "[{}] [svc.net] [request failed --- timeout]; caused by: socket closed",
            chained.correlation_id().unwrap()
        )
    );
    assert_eq!(Level::Fatal.to_log_level(), log::Level::Error);
}
