//! Options shared by every command of the command line app.

use std::path::PathBuf;

use clap::Args;

use crate::{
    Error,
    timezone::{LocalNow, now_in_timezone},
};

/// Where data is stored and how the current time is determined.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Config {
    /// File path to the SQLite database holding the transactions and allowance.
    #[arg(long, env = "ALLOWANCE_DB_PATH", default_value = "allowance.db", global = true)]
    pub db_path: PathBuf,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Defaults to the system's local offset.
    #[arg(long, env = "ALLOWANCE_TIMEZONE", global = true)]
    pub timezone: Option<String>,

    /// Append debug logs to this file.
    #[arg(long, env = "ALLOWANCE_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The current date and time in the configured timezone.
    ///
    /// # Errors
    /// This function will return an [Error::InvalidTimezoneError] if the
    /// configured timezone is not a known timezone.
    pub fn now(&self) -> Result<LocalNow, Error> {
        now_in_timezone(self.timezone.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use time::UtcOffset;

    use crate::{Error, config::Config};

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn parses_all_options() {
        let cli = TestCli::try_parse_from([
            "test",
            "--db-path",
            "spending.db",
            "--timezone",
            "Pacific/Auckland",
            "--log-file",
            "debug.log",
        ])
        .unwrap();

        assert_eq!(
            cli.config,
            Config {
                db_path: PathBuf::from("spending.db"),
                timezone: Some("Pacific/Auckland".to_owned()),
                log_file: Some(PathBuf::from("debug.log")),
            }
        );
    }

    #[test]
    fn now_uses_configured_timezone() {
        let config = Config {
            db_path: PathBuf::from("allowance.db"),
            timezone: Some("Etc/UTC".to_owned()),
            log_file: None,
        };

        assert_eq!(config.now().unwrap().instant().offset(), UtcOffset::UTC);
    }

    #[test]
    fn now_rejects_unknown_timezone() {
        let config = Config {
            db_path: PathBuf::from("allowance.db"),
            timezone: Some("Nowhere/Special".to_owned()),
            log_file: None,
        };

        assert_eq!(
            config.now(),
            Err(Error::InvalidTimezoneError("Nowhere/Special".to_owned()))
        );
    }
}
