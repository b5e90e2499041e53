use crate::{Result, Verbosity};
use std::io;

/// This trait describes a handle that a `StreamWriter` can write lines to.
///
/// It extends `io::Write` with the two questions the writer asks at
/// construction time: is this really a writable stream, and is it an
/// interactive terminal.
pub trait Stream: io::Write {
    /// Returns true if and only if this handle is a genuine writable stream.
    ///
    /// This defaults to `true`.
    fn is_writable(&self) -> bool {
        true
    }

    /// Asks the operating system whether this handle is an interactive
    /// terminal.
    ///
    /// Returns `None` when the handle has no is-a-tty capability at all, as
    /// is the case for in-memory buffers. This defaults to `None`.
    fn is_tty(&self) -> Option<bool> {
        None
    }
}

impl<T: ?Sized + Stream> Stream for &mut T {
    fn is_writable(&self) -> bool {
        (**self).is_writable()
    }
    fn is_tty(&self) -> Option<bool> {
        (**self).is_tty()
    }
}

impl<T: ?Sized + Stream> Stream for Box<T> {
    fn is_writable(&self) -> bool {
        (**self).is_writable()
    }
    fn is_tty(&self) -> Option<bool> {
        (**self).is_tty()
    }
}

/// The verbosity-gated output contract.
///
/// Implementors supply the raw line primitive and the two settings. The
/// provided `write` and `write_lines` methods do the filtering.
pub trait Output {
    /// The current verbosity threshold.
    fn verbosity(&self) -> Verbosity;

    /// Change the verbosity threshold for subsequent writes.
    fn set_verbosity(&mut self, verbosity: Verbosity);

    /// Returns true if messages should carry ANSI decoration.
    fn is_decorated(&self) -> bool;

    /// Write `message` as one line, unconditionally.
    fn write_line(&mut self, message: &str) -> Result<()>;

    /// Write `message` as one line if `level` passes the current verbosity.
    ///
    /// Returns whether the line was emitted.
    fn write(&mut self, message: &str, level: Verbosity) -> Result<bool> {
        if !self.verbosity().allows(level) {
            return Ok(false);
        }
        self.write_line(message)?;
        Ok(true)
    }

    /// Write each message as its own line, in order, if `level` passes the
    /// current verbosity. Stops at the first failure.
    fn write_lines<I, M>(&mut self, messages: I, level: Verbosity) -> Result<bool>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
        Self: Sized,
    {
        if !self.verbosity().allows(level) {
            return Ok(false);
        }
        for message in messages {
            self.write_line(message.as_ref())?;
        }
        Ok(true)
    }
}

impl<T: ?Sized + Output> Output for &mut T {
    fn verbosity(&self) -> Verbosity {
        (**self).verbosity()
    }
    fn set_verbosity(&mut self, verbosity: Verbosity) {
        (**self).set_verbosity(verbosity)
    }
    fn is_decorated(&self) -> bool {
        (**self).is_decorated()
    }
    fn write_line(&mut self, message: &str) -> Result<()> {
        (**self).write_line(message)
    }
    fn write(&mut self, message: &str, level: Verbosity) -> Result<bool> {
        (**self).write(message, level)
    }
}
