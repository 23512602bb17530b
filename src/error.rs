use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install logger: {0}")]
    Logger(#[source] Box<dyn std::error::Error + Send + Sync>),
}
