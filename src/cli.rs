//! Command-line interface of the umbrella `magisk` applet.
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Command line of the umbrella `magisk` applet.
///
/// Reached only when the binary runs as `magisk` (or an alias) with no
/// argument or with an option first; `magisk <applet> ...` is redirected
/// before parsing.
#[derive(Parser, Debug)]
#[command(
    name = "magisk",
    about = "Magisk multi-call binary",
    disable_version_flag = true,
    group(ArgGroup::new("action").multiple(false))
)]
pub struct Cli {
    /// Print the version string and version code
    #[arg(short = 'c', group = "action")]
    pub full_version: bool,

    /// Print the version string
    #[arg(short = 'v', group = "action")]
    pub version: bool,

    /// Print the version code
    #[arg(short = 'V', group = "action")]
    pub version_code: bool,

    /// List all applets
    #[arg(long, group = "action")]
    pub list: bool,

    /// Create applet symlinks in DIR pointing at this binary
    #[arg(long, value_name = "DIR", group = "action")]
    pub install: Option<PathBuf>,
}

/// The single action requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `-c`
    FullVersion,
    /// `-v`
    Version,
    /// `-V`
    VersionCode,
    /// `--list`
    List,
    /// `--install DIR`
    Install(PathBuf),
}

impl Cli {
    /// The requested action, or `None` if no option was given.
    #[must_use]
    pub fn action(self) -> Option<Action> {
        if self.full_version {
            Some(Action::FullVersion)
        } else if self.version {
            Some(Action::Version)
        } else if self.version_code {
            Some(Action::VersionCode)
        } else if self.list {
            Some(Action::List)
        } else {
            self.install.map(Action::Install)
        }
    }
}
