//! Diagnostic logging for the calculator.
//!
//! Records go to stderr, so they never interleave with prompts on stdout,
//! and optionally to a file chosen after startup. The filter can be changed
//! at runtime through the [`LogHandle`] returned by [`init`].

use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Filter used when `RUST_LOG` is unset. Prompts share the terminal, so
/// only problems are shown.
pub const DEFAULT_FILTER: &str = "warn";

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot apply log filter: {0}")]
    Reload(#[from] reload::Error),

    #[error("cannot open log file '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logging is already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Local wall-clock time; the date is left out since sessions are short.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(TIME_FORMAT))
    }
}

/// Log file that can be attached after the subscriber is installed.
/// Writes are dropped while no file is attached.
#[derive(Default)]
struct LogFile(Mutex<Option<File>>);

impl LogFile {
    fn replace(&self, file: File) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    }
}

impl Write for &LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock().unwrap_or_else(PoisonError::into_inner).as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.lock().unwrap_or_else(PoisonError::into_inner).as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Runtime controls for an installed subscriber.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    file: Arc<LogFile>,
}

impl LogHandle {
    /// Replaces the active filter. Accepts a bare level such as `debug` or
    /// any `EnvFilter` directive such as `mortgage_core=trace`.
    pub fn set_level(&self, directive: &str) -> Result<(), LoggingError> {
        let filter = EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
            directive: directive.to_string(),
            source,
        })?;
        self.filter.reload(filter)?;
        Ok(())
    }

    /// Appends records to `path` from now on, replacing any earlier file.
    pub fn log_to_file(&self, path: &Path) -> Result<(), LoggingError> {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::File {
                path: path.to_path_buf(),
                source,
            })?;
        self.file.replace(file);
        Ok(())
    }
}

fn build(
    filter: EnvFilter,
    console_ansi: bool,
) -> (impl Subscriber + Send + Sync + 'static, LogHandle) {
    let (filter, filter_handle) = reload::Layer::new(filter);
    let file = Arc::new(LogFile::default());

    let console = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_ansi(console_ansi)
        .with_writer(io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_writer(Arc::clone(&file));

    let subscriber = Registry::default()
        .with(filter)
        .with(console)
        .with(file_layer);

    (
        subscriber,
        LogHandle {
            filter: filter_handle,
            file,
        },
    )
}

/// Installs the global subscriber. Call once at startup.
///
/// The initial filter comes from `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`]. Stderr output is colored only on a terminal.
pub fn init() -> Result<LogHandle, LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (subscriber, handle) = build(filter, io::stderr().is_terminal());
    subscriber.try_init()?;
    Ok(handle)
}
