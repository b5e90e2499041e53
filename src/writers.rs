use crate::probe::{Env, OsEnv, has_color_support};
use crate::{
    Decoration, Error, Output, PlatformFamily, Result, Stream, Verbosity,
};
use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal};
use tracing::{debug, trace};

#[cfg(windows)]
use winapi_util::file as winfile;

/// The line terminator of the platform this crate was compiled for.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// The line terminator of the platform this crate was compiled for.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Writes lines of text to a borrowed stream.
///
/// Each line is built into one contiguous buffer, handed to the stream and
/// flushed before `write_line` returns. If the stream accepts only part of
/// the buffer, the rest is written until the line is complete; a short write
/// is never reported as an error. Whether output is decorated is settled once,
/// when the writer is built, and never changes afterwards.
///
/// The writer borrows its stream and never closes it. Whoever opened the
/// stream is responsible for closing it once the writer is gone.
///
/// There is no locking: two writers sharing one handle across threads may
/// interleave their bytes.
pub struct StreamWriter<'a, S: ?Sized> {
    stream: &'a mut S,
    verbosity: Verbosity,
    decorated: bool,
}

impl<'a, S: ?Sized + Stream> StreamWriter<'a, S> {
    /// Create a writer with `Normal` verbosity and automatic decoration.
    pub fn new(stream: &'a mut S) -> Result<StreamWriter<'a, S>> {
        StreamWriter::with_options(
            stream,
            Verbosity::default(),
            Decoration::default(),
        )
    }

    /// Create a writer with the given verbosity and decoration preference.
    ///
    /// An `Auto` preference is resolved against the current platform and
    /// process environment.
    ///
    /// Fails with `Error::InvalidArgument` if `stream` isn't a writable
    /// stream.
    pub fn with_options(
        stream: &'a mut S,
        verbosity: Verbosity,
        decoration: Decoration,
    ) -> Result<StreamWriter<'a, S>> {
        StreamWriter::with_env(
            stream,
            verbosity,
            decoration,
            PlatformFamily::current(),
            &OsEnv,
        )
    }

    /// Like `with_options`, but resolves an `Auto` preference against the
    /// given platform family and environment instead of the real ones.
    pub fn with_env<E: ?Sized + Env>(
        stream: &'a mut S,
        verbosity: Verbosity,
        decoration: Decoration,
        family: PlatformFamily,
        env: &E,
    ) -> Result<StreamWriter<'a, S>> {
        if !stream.is_writable() {
            return Err(Error::InvalidArgument);
        }
        let decorated = match decoration.forced() {
            Some(yes) => yes,
            None => {
                let is_tty = stream.is_tty();
                let yes = has_color_support(family, env, is_tty);
                debug!(?family, ?is_tty, decorated = yes, "resolved decoration");
                yes
            }
        };
        Ok(StreamWriter { stream, verbosity, decorated })
    }

    /// Return a reference to the underlying stream.
    pub fn get_ref(&self) -> &S {
        &*self.stream
    }

    /// Write `message` followed by exactly one line terminator, then flush.
    ///
    /// The message is opaque: any formatting markers in it are written as is.
    /// No verbosity filtering happens here; see `Output::write`.
    pub fn write_line(&mut self, message: &str) -> Result<()> {
        let mut line = String::with_capacity(message.len() + LINE_ENDING.len());
        line.push_str(message);
        line.push_str(LINE_ENDING);
        self.stream.write_all(line.as_bytes()).map_err(Error::WriteFailure)?;
        self.stream.flush().map_err(Error::WriteFailure)?;
        trace!(bytes = line.len(), "wrote line");
        Ok(())
    }
}

impl<'a, S: ?Sized + Stream> Output for StreamWriter<'a, S> {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn write_line(&mut self, message: &str) -> Result<()> {
        StreamWriter::write_line(self, message)
    }
}

impl<'a, S: ?Sized> fmt::Debug for StreamWriter<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamWriter")
            .field("verbosity", &self.verbosity)
            .field("decorated", &self.decorated)
            .finish_non_exhaustive()
    }
}

impl Stream for io::Stdout {
    fn is_tty(&self) -> Option<bool> {
        Some(self.is_terminal())
    }
}

impl Stream for io::Stderr {
    fn is_tty(&self) -> Option<bool> {
        Some(self.is_terminal())
    }
}

impl<'a> Stream for io::StdoutLock<'a> {
    fn is_tty(&self) -> Option<bool> {
        Some(self.is_terminal())
    }
}

impl<'a> Stream for io::StderrLock<'a> {
    fn is_tty(&self) -> Option<bool> {
        Some(self.is_terminal())
    }
}

impl Stream for File {
    #[cfg(windows)]
    fn is_writable(&self) -> bool {
        // Only rejects invalid handles. A valid handle opened read-only
        // still passes and fails later with `Error::WriteFailure`.
        winfile::typ(self).is_ok()
    }

    fn is_tty(&self) -> Option<bool> {
        Some(self.is_terminal())
    }
}

/// In-memory buffers have no terminal to ask about.
impl Stream for Vec<u8> {}

/// A sink discards everything, so it isn't a stream to write output to.
impl Stream for io::Sink {
    fn is_writable(&self) -> bool {
        false
    }
}
