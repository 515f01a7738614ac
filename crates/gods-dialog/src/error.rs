use thiserror::Error;

/// Failures of the interactive console. Both are fatal to a session.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The input stream reached end of file while a line was expected.
    #[error("input stream closed")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
