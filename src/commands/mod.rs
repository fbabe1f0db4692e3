//! The umbrella `magisk` applet.
pub mod install;
pub mod list;
pub mod version;

use std::ffi::OsString;
use std::io::Write;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::cli::{Action, Cli};

/// Run the umbrella command with its full argument vector and return the
/// exit status.
///
/// Help goes to `out` with status `0`.  A usage error, or no option at all,
/// prints usage to `err` with status `1`.
pub fn run(argv: &[OsString], out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            write!(err, "{}", e.render()).ok();
            return 1;
        }
        Err(e) => {
            write!(out, "{}", e.render()).ok();
            return 0;
        }
    };

    let Some(action) = cli.action() else {
        write!(err, "{}", Cli::command().render_help()).ok();
        return 1;
    };

    match execute(&action, out) {
        Ok(()) => 0,
        Err(e) => {
            writeln!(err, "magisk: {e:#}").ok();
            1
        }
    }
}

fn execute(action: &Action, out: &mut dyn Write) -> Result<()> {
    match action {
        Action::FullVersion => version::full(out),
        Action::Version => version::short(out),
        Action::VersionCode => version::code(out),
        Action::List => list::run(out),
        Action::Install(dir) => install::run(dir, out),
    }
}
