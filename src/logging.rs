//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Config file read from the working directory when present.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Initialize logging from [`LOG_CONFIG_FILE`], or log to stderr when the
/// file does not exist.
pub fn init(verbose: bool) -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        log::debug!("Logging configured from {LOG_CONFIG_FILE}");
        return Ok(());
    }
    log4rs::init_config(stderr_config(verbose)?)?;
    Ok(())
}

fn stderr_config(verbose: bool) -> Result<Config, Box<dyn Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l})} {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
