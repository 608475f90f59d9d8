use chrono::Local;
use std::{fs::OpenOptions, io, path::Path, sync::Mutex};
use tracing::{level_filters::LevelFilter, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
};

const TIME_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Local wall-clock timestamps for every log line.
pub struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(TIME_FORMAT))
    }
}

/// Builds the subscriber for one run. Console output goes to stderr; when
/// `log_file` is set the same lines are appended there without colours.
///
/// The caller installs it with `tracing::subscriber::with_default`, so nothing
/// is registered process-wide.
pub fn build(quiet: bool, log_file: Option<&Path>) -> io::Result<impl Subscriber + Send + Sync> {
    let level = match quiet {
        true => LevelFilter::INFO,
        false => LevelFilter::DEBUG,
    };
    let console = fmt::layer()
        .with_timer(LocalTime)
        .with_target(false)
        .with_writer(io::stderr);
    let file = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)?;
            Some(
                fmt::layer()
                    .with_timer(LocalTime)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    Ok(tracing_subscriber::registry()
        .with(level)
        .with(console)
        .with(file))
}
