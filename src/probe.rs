//! Decides whether a stream can display ANSI decoration.
//!
//! The decision is a pure function of the platform family, the environment
//! and the stream's answer to "are you a terminal?". Callers pass all three in,
//! so the probe never reads process globals on its own and can be exercised
//! for any platform from any platform.

use std::ffi::OsString;

use crate::types::PlatformFamily;

/// The environment variable that signals an ANSI-capable Windows console.
pub const ANSICON: &str = "ANSICON";

/// Read access to environment variables.
pub trait Env {
    /// Returns the value of `key`, or `None` if it isn't set.
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The environment of the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl<E: ?Sized + Env> Env for &E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}

/// Returns true if a stream on `family` supports ANSI decoration.
///
/// * Windows: supported iff `ANSICON` is set to a non-empty value. The
///   stream itself is not consulted.
/// * Posix: supported iff the stream has an is-a-tty capability
///   (`is_tty` is `Some`) and it reports an interactive terminal. No
///   capability means no decoration.
pub fn has_color_support<E: ?Sized + Env>(
    family: PlatformFamily,
    env: &E,
    is_tty: Option<bool>,
) -> bool {
    match family {
        PlatformFamily::Windows => {
            env.var_os(ANSICON).is_some_and(|v| !v.is_empty())
        }
        PlatformFamily::Posix => is_tty.unwrap_or(false),
    }
}
