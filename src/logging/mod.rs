//! Logging infrastructure: all diagnostics go to stderr through [`tracing`].
mod subscriber;

pub use subscriber::{LOG_ENV, init_subscriber};

use crate::invocation;

/// Line prefix naming the running program, e.g. `"resetprop: "`.
///
/// Empty until `argv[0]` has been recorded, or when it was empty.
fn prefix() -> String {
    invocation::argv0()
        .map(invocation::base_name)
        .filter(|name| !name.is_empty())
        .map_or_else(String::new, |name| format!("{}: ", name.to_string_lossy()))
}
