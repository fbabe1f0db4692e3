//! The dispatch algorithm: from a resolved invocation to an applet call.
use std::ffi::{OsStr, OsString};
use std::io::Write;

use crate::error::DispatchError;
use crate::host::Host;
use crate::invocation::{Invocation, Visibility, shift};
use crate::registry::{Applet, PRIVATE_APPLETS, PUBLIC_APPLETS, is_umbrella_alias};

/// Exit status for malformed invocations and unknown applets.
pub const FAILURE: i32 = 1;

/// The applet selected for an invocation and the arguments it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route<'a> {
    /// Applet to invoke.
    pub applet: Applet,
    /// Its argument vector, `argv[0]` included.
    pub argv: &'a [OsString],
}

/// Select the applet for `inv` without invoking it.
///
/// Private invocations are matched against the private table only.  Public
/// invocations under an umbrella alias are redirected to the sub-command in
/// `argv[1]` unless it is missing or starts with `-`, in which case the
/// umbrella itself is selected with the unshifted arguments.
///
/// # Errors
///
/// Returns [`DispatchError::AppletNotFound`] with the attempted name if no
/// table entry matches.
pub fn route<'a>(inv: &Invocation<'a>) -> Result<Route<'a>, DispatchError> {
    let (name, argv) = match inv.visibility {
        Visibility::Private => {
            return PRIVATE_APPLETS
                .lookup(inv.name)
                .map(|applet| Route {
                    applet,
                    argv: inv.argv,
                })
                .ok_or_else(|| not_found(inv.name));
        }
        Visibility::Public if is_umbrella_alias(inv.name) => match subcommand(inv.argv) {
            Some(shifted) => (shifted.first().map_or(inv.name, OsString::as_os_str), shifted),
            None => {
                return Ok(Route {
                    applet: Applet::Magisk,
                    argv: inv.argv,
                });
            }
        },
        Visibility::Public => (inv.name, inv.argv),
    };

    PUBLIC_APPLETS
        .lookup(name)
        .map(|applet| Route { applet, argv })
        .ok_or_else(|| not_found(name))
}

/// `argv` shifted past the umbrella name, if `argv[1]` names a sub-command.
fn subcommand(argv: &[OsString]) -> Option<&[OsString]> {
    let shifted = shift(argv)?;
    let next = shifted.first()?;
    (!next.as_encoded_bytes().starts_with(b"-")).then_some(shifted)
}

fn not_found(name: &OsStr) -> DispatchError {
    DispatchError::AppletNotFound(name.to_string_lossy().into_owned())
}

/// Run one process invocation to completion and return its exit status.
///
/// Primes the environment through `host` exactly once (unless `args` is
/// empty), resolves and routes the invocation, then hands the selected
/// applet's arguments to `host`.  The applet's result is returned verbatim.
/// An unknown applet is reported to `stderr` as `<name>: applet not found`
/// and yields [`FAILURE`]; a malformed invocation yields [`FAILURE`] silently.
pub fn run<H: Host + ?Sized>(host: &H, args: &[OsString], stderr: &mut dyn Write) -> i32 {
    let Some(argv0) = args.first() else {
        return FAILURE;
    };
    host.prime(argv0);

    match Invocation::resolve(args).and_then(|inv| route(&inv)) {
        Ok(Route { applet, argv }) => {
            tracing::debug!(%applet, argc = argv.len(), "dispatching");
            host.invoke(applet, argv)
        }
        Err(err @ DispatchError::AppletNotFound(_)) => {
            tracing::debug!("{err}");
            writeln!(stderr, "{err}").ok();
            FAILURE
        }
        Err(DispatchError::MalformedInvocation) => FAILURE,
    }
}
