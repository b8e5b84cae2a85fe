use std::io;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SixaxisError {
    #[error("Failed to open device: {0}")]
    Open(#[source] io::Error),

    #[error("Failed to claim interface {interface}: {source}")]
    Claim {
        interface: u8,
        #[source]
        source: io::Error,
    },

    #[error("Control transfer failed: {0}")]
    Transfer(#[from] nusb::transfer::TransferError),

    #[error("Control transfer timed out after {0:?}")]
    Timeout(Duration),

    #[error("Master report too short: expected {expected} bytes, got {actual}")]
    ReportTooShort { expected: usize, actual: usize },
}
