use log::{LevelFilter, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::error::{Result, SopranoError};

/// Environment variable that overrides the `-v` verbosity.
pub const LOG_ENV: &str = "SOPRANO_LOG";

enum Sink {
    Stderr,
    File(Mutex<File>),
}

struct Logger {
    level: LevelFilter,
    sink: Sink,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match &self.sink {
            Sink::Stderr => write_record(&mut io::stderr().lock(), record),
            Sink::File(file) => {
                if let Ok(mut file) = file.lock() {
                    write_record(&mut *file, record);
                }
            }
        }
    }

    fn flush(&self) {
        if let Sink::File(file) = &self.sink {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Writes one `[LEVEL] message` line. Write failures are dropped so a
/// closed sink never takes the process down.
fn write_record<W: Write>(out: &mut W, record: &Record) {
    let _ = writeln!(out, "[{}] {}", record.level(), record.args());
}

/// Maps the number of `-v` flags to a level filter.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Resolves the level, letting a valid `SOPRANO_LOG` value win.
pub fn resolve_level(verbose: u8, env: Option<&str>) -> LevelFilter {
    env.and_then(|value| value.trim().parse().ok())
        .unwrap_or_else(|| level_for_verbosity(verbose))
}

/// Installs the process logger, writing to `path` if given and to stderr
/// otherwise.
pub fn init_logger(level: LevelFilter, path: Option<&Path>) -> Result<()> {
    let sink = match path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| SopranoError::File {
                    path: path.display().to_string(),
                    source,
                })?;
            Sink::File(Mutex::new(file))
        }
        None => Sink::Stderr,
    };

    log::set_boxed_logger(Box::new(Logger { level, sink }))
        .map_err(|err| SopranoError::Logger(err.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn record_line_format() {
        let mut out = Vec::new();
        write_record(
            &mut out,
            &Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("parsed {} nodes", 3))
                .build(),
        );
        assert_eq!(String::from_utf8(out).unwrap(), "[DEBUG] parsed 3 nodes\n");
    }

    #[test]
    fn closed_sink_is_ignored() {
        write_record(
            &mut ClosedSink,
            &Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("dropped"))
                .build(),
        );
    }

    #[test]
    fn env_overrides_verbosity() {
        assert_eq!(resolve_level(0, Some("trace")), LevelFilter::Trace);
        assert_eq!(resolve_level(3, Some("off")), LevelFilter::Off);
        assert_eq!(resolve_level(1, Some("loud")), LevelFilter::Info);
        assert_eq!(resolve_level(1, None), LevelFilter::Info);
    }
}
