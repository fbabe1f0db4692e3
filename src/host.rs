//! The seam between the dispatcher and the code that actually runs.
use std::cell::OnceCell;
use std::ffi::{OsStr, OsString};
use std::io;

use crate::commands;
use crate::config::Config;
use crate::exec;
use crate::invocation;
use crate::logging;
use crate::platform;
use crate::registry::Applet;

/// Process-level collaborators of the dispatcher.
///
/// [`crate::dispatch::run`] calls [`prime`](Host::prime) once before routing
/// and [`invoke`](Host::invoke) at most once afterwards.
pub trait Host {
    /// Prepare the process environment before any applet runs.
    fn prime(&self, argv0: &OsStr);

    /// Run `applet` with `argv` and return its exit status.
    fn invoke(&self, applet: Applet, argv: &[OsString]) -> i32;
}

/// The production host.
///
/// The umbrella command is built in; every other applet is handed to the
/// program configured for it in the backend configuration, which is read on
/// first use.
#[derive(Debug, Default)]
pub struct System {
    config: OnceCell<Config>,
}

impl System {
    /// Create a host that loads its configuration lazily.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with an already-loaded configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config: OnceCell::from(config),
        }
    }

    fn config(&self) -> &Config {
        self.config.get_or_init(Config::load_or_default)
    }
}

impl Host for System {
    fn prime(&self, argv0: &OsStr) {
        platform::clear_umask();
        logging::init_subscriber();
        invocation::record_argv0(argv0);
    }

    fn invoke(&self, applet: Applet, argv: &[OsString]) -> i32 {
        match applet {
            Applet::Magisk => {
                commands::run(argv, &mut io::stdout().lock(), &mut io::stderr().lock())
            }
            Applet::Su | Applet::Resetprop | Applet::Zygisk => {
                match exec::launch(applet, self.config(), argv) {
                    Ok(code) => code,
                    Err(err) => {
                        tracing::error!("{err}");
                        err.exit_code()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_backend_fails_with_one() {
        let host = System::with_config(Config::default());
        let argv = vec![OsString::from("su")];
        assert_eq!(host.invoke(Applet::Su, &argv), 1);
    }

    #[test]
    fn missing_backend_program_fails_with_127() {
        let config: Config = toml::from_str(
            "[applets.resetprop]\nprogram = \"this-program-does-not-exist-12345\"\n",
        )
        .unwrap();
        let host = System::with_config(config);
        let argv = vec![OsString::from("resetprop")];
        assert_eq!(host.invoke(Applet::Resetprop, &argv), 127);
    }
}
