//! Invocation identity: which name was this process started under?
use std::ffi::{OsStr, OsString};
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use crate::error::DispatchError;

/// Which visibility table an invocation is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Ordinary invocation by command name.
    Public,
    /// `argv[0]` was empty; `argv[1]` names a private applet.
    Private,
}

/// The resolved identity of one process invocation.
///
/// `argv` is always a sub-slice of the vector passed to [`Invocation::resolve`];
/// shifting never copies or mutates the original arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Name to look up in the registry.
    pub name: &'a OsStr,
    /// Arguments the matched applet receives, including its own `argv[0]`.
    pub argv: &'a [OsString],
    /// Which table the name is resolved against.
    pub visibility: Visibility,
}

impl<'a> Invocation<'a> {
    /// Resolve the requested command name from a raw argument vector.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MalformedInvocation`] if `args` is empty, or if
    /// `argv[0]` is empty and no applet name follows it.
    pub fn resolve(args: &'a [OsString]) -> Result<Self, DispatchError> {
        let (argv0, _) = args.split_first().ok_or(DispatchError::MalformedInvocation)?;

        if argv0.is_empty() {
            let argv = shift(args).ok_or(DispatchError::MalformedInvocation)?;
            let (name, _) = argv
                .split_first()
                .ok_or(DispatchError::MalformedInvocation)?;
            return Ok(Self {
                name,
                argv,
                visibility: Visibility::Private,
            });
        }

        Ok(Self {
            name: base_name(argv0),
            argv: args,
            visibility: Visibility::Public,
        })
    }
}

/// Drop the first argument, making the next one the logical `argv[0]`.
///
/// Returns `None` if fewer than two arguments remain, since the result would
/// have no `argv[0]`.
#[must_use]
pub fn shift(argv: &[OsString]) -> Option<&[OsString]> {
    match argv {
        [_, rest @ ..] if !rest.is_empty() => Some(rest),
        _ => None,
    }
}

/// Component after the last `/` of `arg`, ignoring trailing separators.
///
/// `.` and `..` are components like any other. A value made only of
/// separators yields `/`.
#[must_use]
pub fn base_name(arg: &OsStr) -> &OsStr {
    let bytes = arg.as_encoded_bytes();
    let Some(end) = bytes.iter().rposition(|&b| b != b'/') else {
        return if bytes.is_empty() { arg } else { OsStr::new("/") };
    };
    let start = bytes
        .get(..end)
        .and_then(|head| head.iter().rposition(|&b| b == b'/'))
        .map_or(0, |i| i + 1);
    component(arg, start..=end)
}

#[cfg(unix)]
fn component(arg: &OsStr, range: RangeInclusive<usize>) -> &OsStr {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes()
        .get(range)
        .map_or(arg, <OsStr as OsStrExt>::from_bytes)
}

#[cfg(not(unix))]
fn component(arg: &OsStr, range: RangeInclusive<usize>) -> &OsStr {
    arg.to_str().and_then(|s| s.get(range)).map_or(arg, OsStr::new)
}

static ARGV0: OnceLock<OsString> = OnceLock::new();

/// Remember the process's original `argv[0]` for later diagnostics.
///
/// Only the first call has an effect.
pub fn record_argv0(argv0: &OsStr) {
    ARGV0.set(argv0.to_os_string()).ok();
}

/// The `argv[0]` recorded during priming, if any.
#[must_use]
pub fn argv0() -> Option<&'static OsStr> {
    ARGV0.get().map(OsString::as_os_str)
}
