use std::fmt;
use std::path::MAIN_SEPARATOR;
use std::str::FromStr;

/// Verbosity represents how much output the end user asked for.
///
/// Levels are ordered: `Quiet < Normal < Verbose`. A message tagged with a
/// level is emitted only when the output's configured verbosity is at least
/// that level.
///
/// The `FromStr` implementation accepts the lowercase variant name, matched
/// case insensitively. Any other string results in an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Verbosity {
    /// Only output that must always be shown.
    Quiet,
    /// The usual amount of output.
    Normal,
    /// Everything, including diagnostic chatter.
    Verbose,
}

/// The default is `Normal`.
impl Default for Verbosity {
    fn default() -> Verbosity {
        Verbosity::Normal
    }
}

impl Verbosity {
    /// Returns the accepted spelling of this level.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
        }
    }

    /// Returns true if a message at `level` passes this threshold.
    pub fn allows(&self, level: Verbosity) -> bool {
        *self >= level
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Verbosity, ParseVerbosityError> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            unknown => {
                Err(ParseVerbosityError { unknown: unknown.to_string() })
            }
        }
    }
}

/// An error that occurs when parsing a `Verbosity` fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(
    "unrecognized verbosity '{unknown}': valid choices are: \
     quiet, normal, verbose"
)]
pub struct ParseVerbosityError {
    unknown: String,
}

impl ParseVerbosityError {
    /// Return the string that couldn't be parsed as a verbosity level.
    pub fn invalid_choice(&self) -> &str {
        &self.unknown
    }
}

/// Decoration says whether ANSI styling should be applied to output.
///
/// `Auto` defers the decision to the capability probe, which runs once when
/// the writer is built. `Forced` skips the probe entirely.
///
/// The `FromStr` implementation accepts `auto`, `always` and `never`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decoration {
    /// Decide from the platform and the stream.
    Auto,
    /// Decorate (`true`) or don't (`false`), whatever the stream is.
    Forced(bool),
}

/// The default is `Auto`.
impl Default for Decoration {
    fn default() -> Decoration {
        Decoration::Auto
    }
}

impl From<bool> for Decoration {
    fn from(yes: bool) -> Decoration {
        Decoration::Forced(yes)
    }
}

impl From<Option<bool>> for Decoration {
    fn from(choice: Option<bool>) -> Decoration {
        choice.map_or(Decoration::Auto, Decoration::Forced)
    }
}

impl Decoration {
    /// Returns the forced value, or `None` if the probe must decide.
    pub fn forced(&self) -> Option<bool> {
        match *self {
            Decoration::Auto => None,
            Decoration::Forced(yes) => Some(yes),
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Decoration::Auto => f.write_str("auto"),
            Decoration::Forced(true) => f.write_str("always"),
            Decoration::Forced(false) => f.write_str("never"),
        }
    }
}

impl FromStr for Decoration {
    type Err = ParseDecorationError;

    fn from_str(s: &str) -> Result<Decoration, ParseDecorationError> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Decoration::Auto),
            "always" => Ok(Decoration::Forced(true)),
            "never" => Ok(Decoration::Forced(false)),
            unknown => {
                Err(ParseDecorationError { unknown: unknown.to_string() })
            }
        }
    }
}

/// An error that occurs when parsing a `Decoration` fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(
    "unrecognized decoration choice '{unknown}': valid choices are: \
     auto, always, never"
)]
pub struct ParseDecorationError {
    unknown: String,
}

impl ParseDecorationError {
    /// Return the string that couldn't be parsed as a decoration choice.
    pub fn invalid_choice(&self) -> &str {
        &self.unknown
    }
}

/// The platform family, as far as decoration detection cares.
///
/// Platforms whose path separator is a backslash follow the Windows rules;
/// everything else follows the POSIX rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlatformFamily {
    /// Backslash path separator.
    Windows,
    /// Forward slash path separator.
    Posix,
}

impl PlatformFamily {
    /// The family of the platform this crate was compiled for.
    pub fn current() -> PlatformFamily {
        PlatformFamily::from_separator(MAIN_SEPARATOR)
    }

    /// Classify a platform by its main path separator.
    pub fn from_separator(sep: char) -> PlatformFamily {
        if sep == '\\' {
            PlatformFamily::Windows
        } else {
            PlatformFamily::Posix
        }
    }
}
