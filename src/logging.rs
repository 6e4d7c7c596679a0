//! Logging setup for the command line app.

use std::{fs::OpenOptions, path::Path, sync::Arc};

use tracing_subscriber::{
    EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::Error;

/// The log level used when `RUST_LOG` is not set.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global tracing subscriber.
///
/// Events are written to stderr, filtered by `RUST_LOG` (default `warn`) so
/// that they do not mix with command output. If `log_file` is given, events
/// at `DEBUG` and above are also appended to that file.
///
/// # Errors
/// This function will return an [Error::LogFileError] if `log_file` cannot be
/// opened for appending.
pub fn setup_logging(log_file: Option<&Path>) -> Result<(), Error> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| Error::LogFileError(format!("{}: {error}", path.display())))?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(filter::LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_log)
        .with(debug_log)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{Error, logging::setup_logging};

    #[test]
    fn unopenable_log_file_is_an_error() {
        let result = setup_logging(Some(Path::new("/this/directory/does/not/exist/debug.log")));

        assert!(matches!(result, Err(Error::LogFileError(_))));
    }
}
