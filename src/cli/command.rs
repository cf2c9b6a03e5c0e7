use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};

#[derive(Debug, ClapParser)]
#[command(
    name       = env!("CARGO_PKG_NAME"),
    version    = env!("CARGO_PKG_VERSION"),
    about      = "Pack a textual stream of binary digits from stdin into a raw byte file",
    long_about = "Reads lines of '0'/'1' characters from standard input until \
                  end-of-input (Ctrl+D), strips spaces and line terminators, and \
                  writes the bits packed MSB-first into the destination file. \
                  A trailing group shorter than 8 bits is written at its own \
                  width (\"101\" becomes the byte 5). Empty input produces an \
                  empty file. Interrupting the read with Ctrl+C aborts without \
                  writing anything.",
)]
pub struct Cli {
    /// Destination file for the packed bytes.
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Set the log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors.
    Warn,
    /// Show info, warnings and errors (default).
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Colorized human-readable text.
    Plain,
    /// Structured JSON per log record.
    Json,
}
