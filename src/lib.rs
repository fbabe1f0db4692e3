//! Multi-call binary dispatcher for the magisk applet family.
//!
//! One executable, many commands: the name the process was started under
//! (`argv[0]`'s base name, or `argv[1]` when `argv[0]` is empty) selects the
//! applet to run.
//!
//! - **[`invocation`]**: resolve the requested name from the argument vector
//! - **[`registry`]**: the sealed applet set and its public/private tables
//! - **[`dispatch`]**: umbrella redirection, table lookup, and [`run`]
//! - **[`host`]**: priming and invocation seam; [`host::System`] in production
//! - **[`commands`]**: the built-in umbrella `magisk` command
//! - **[`exec`]** / **[`config`]**: hand-off to configured backend programs
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exec;
pub mod host;
pub mod invocation;
pub mod logging;
pub mod platform;
pub mod registry;

pub use dispatch::run;
