/*!
This crate provides a line writer for console streams. A `StreamWriter`
borrows any writable stream (standard output, standard error, a file, a pipe)
and writes whole lines to it, flushing after each one.

Two settings travel with the writer:

* a `Verbosity` threshold, consulted by `Output::write` to decide whether a
  message is emitted at all;
* a decoration flag saying whether ANSI styling is wanted. When left on
  `Decoration::Auto`, it is decided once at construction: on Windows,
  decoration is on iff `ANSICON` is set; elsewhere, iff the stream is an
  interactive terminal.

Rendering styles is left to a formatter; this crate only reports whether
decoration is appropriate.

# Example

```rust,no_run
# fn test() -> streamout::Result<()> {
use std::io;
use streamout::{Decoration, Output, StreamWriter, Verbosity};

let mut stdout = io::stdout();
let mut out = StreamWriter::with_options(
    &mut stdout,
    Verbosity::Normal,
    Decoration::Auto,
)?;
out.write("shown", Verbosity::Normal)?;
out.write("hidden", Verbosity::Verbose)?;
# Ok(()) }
```
*/

mod error;
pub mod probe;
mod traits;
mod types;
mod writers;

pub use error::{Error, Result};
pub use probe::{Env, OsEnv, has_color_support};
pub use traits::{Output, Stream};
pub use types::{
    Decoration, ParseDecorationError, ParseVerbosityError, PlatformFamily,
    Verbosity,
};
pub use writers::{LINE_ENDING, StreamWriter};
