use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub const LOG_FILE_NAME: &str = "imgfetch.log";

/// Send `tracing` output to `<dir>/imgfetch.log`; the terminal belongs to the
/// TUI. Keep the returned guard alive until exit so buffered lines get flushed.
///
/// Returns `None`, with logging left off, when the file cannot be opened.
pub fn init(dir: &Path, level: Level) -> Option<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init();

    Some(guard)
}
