use std::io;

/// A specialized result type for stream output.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a `StreamWriter` can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The handle given at construction is not a writable stream.
    #[error("the stream writer needs a writable stream as its handle")]
    InvalidArgument,
    /// The operating system rejected a write or flush.
    ///
    /// No retry is attempted and no partial-write state is kept. The caller
    /// decides whether this aborts the program.
    #[error("unable to write output")]
    WriteFailure(#[source] io::Error),
}

impl Error {
    /// Returns the underlying I/O error for a write failure.
    pub fn io_error(&self) -> Option<&io::Error> {
        match *self {
            Error::InvalidArgument => None,
            Error::WriteFailure(ref err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn write_failure_keeps_os_error_as_source() {
        let err = Error::WriteFailure(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "unable to write output");
        let source = err.source().expect("source");
        assert!(source.to_string().to_lowercase().contains("pipe"));
        assert_eq!(
            err.io_error().map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
    }

    #[test]
    fn invalid_argument_has_no_source() {
        let err = Error::InvalidArgument;
        assert!(err.source().is_none());
        assert!(err.io_error().is_none());
    }
}
