use log::{Level, Log};

pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Source locations are only interesting when debugging.
        if record.level() >= Level::Debug {
            println!(
                "{file}:{line}: {}: {}",
                record.level(),
                record.args(),
                file = record.file().unwrap_or_default(),
                line = record.line().unwrap_or_default()
            );
        } else {
            println!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}
