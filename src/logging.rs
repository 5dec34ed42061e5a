use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up logging to file and, optionally, to stdout
///
/// # Arguments
///
/// * 'log_path' - path to the log file
/// * 'log_level' - one of off, error, warn, info, debug and trace
/// * 'log_to_stdout' - whether to also log to stdout
pub fn setup_logger(log_path: &str, log_level: &str, log_to_stdout: bool) -> Result<(), ConfigError> {
    let config = logger_config(log_path, log_level, log_to_stdout)?;
    log4rs::init_config(config)?;

    Ok(())
}

/// Builds the log4rs configuration
///
/// # Arguments
///
/// * 'log_path' - path to the log file
/// * 'log_level' - one of off, error, warn, info, debug and trace
/// * 'log_to_stdout' - whether to also log to stdout
fn logger_config(log_path: &str, log_level: &str, log_to_stdout: bool) -> Result<Config, ConfigError> {
    let level = LevelFilter::from_str(log_level)
        .map_err(|_| ConfigError(format!("invalid log level: {}", log_level)))?;

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(log_path)?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    Ok(builder.build(root.build(level))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn log_path(dir: &TempDir) -> String {
        dir.path().join("log").join("nookweather.log").to_string_lossy().to_string()
    }

    #[test]
    fn test_logger_config() {
        let dir = TempDir::new().unwrap();
        let config = logger_config(&log_path(&dir), "debug", true).unwrap();

        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert!(dir.path().join("log").join("nookweather.log").exists());
    }

    #[test]
    fn test_logger_config_file_only() {
        let dir = TempDir::new().unwrap();
        let config = logger_config(&log_path(&dir), "warn", false).unwrap();

        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.root().appenders(), ["file".to_string()]);
    }

    #[test]
    fn test_invalid_level() {
        let dir = TempDir::new().unwrap();
        assert!(logger_config(&log_path(&dir), "loud", false).is_err());
    }
}
