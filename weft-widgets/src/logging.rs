//! File logging for hosts that own the terminal.
//!
//! The widgets log through the `log` facade. A full-screen host cannot let
//! log lines reach stdout, so this installs a simplelog `WriteLogger` that
//! writes to a file instead.

use std::fs::File;
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Install a global file logger at `level`.
///
/// Returns an error if the file cannot be created. A logger that was
/// already installed is left in place.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    if WriteLogger::init(level, Config::default(), file).is_err() {
        log::debug!("logger already installed, keeping existing one");
    }
    Ok(())
}
