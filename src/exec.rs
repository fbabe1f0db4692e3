//! Hand an applet invocation over to its backend program.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{Backend, Config};
use crate::error::BackendError;
use crate::registry::Applet;

/// Locate the program named by `backend`.
///
/// Names containing a path separator are taken as-is; bare names are looked
/// up on `PATH`.
///
/// # Errors
///
/// Returns [`BackendError::NotFound`] if the program does not exist.
pub fn resolve_program(applet: Applet, backend: &Backend) -> Result<PathBuf, BackendError> {
    let not_found = || BackendError::NotFound {
        applet: applet.name().to_string(),
        program: backend.program.clone(),
    };
    if backend.program.is_empty() {
        return Err(not_found());
    }
    let program = Path::new(&backend.program);
    if program.components().count() > 1 {
        return if program.exists() {
            Ok(program.to_path_buf())
        } else {
            Err(not_found())
        };
    }
    which::which(program).map_err(|_| not_found())
}

/// Build the command for `applet`: `argv[0]` is preserved, the backend's
/// configured arguments come next, then `argv[1..]`.
///
/// # Errors
///
/// Returns an error if no backend is configured or its program is missing.
pub fn command(applet: Applet, config: &Config, argv: &[OsString]) -> Result<Command, BackendError> {
    let backend = config
        .backend(applet)
        .ok_or_else(|| BackendError::NotConfigured(applet.name().to_string()))?;
    let program = resolve_program(applet, backend)?;

    let mut cmd = Command::new(&program);
    if let Some((argv0, rest)) = argv.split_first() {
        set_arg0(&mut cmd, argv0);
        cmd.args(&backend.args).args(rest);
    } else {
        cmd.args(&backend.args);
    }
    tracing::debug!("{applet} -> {}", program.display());
    Ok(cmd)
}

#[cfg(unix)]
fn set_arg0(cmd: &mut Command, argv0: &OsString) {
    use std::os::unix::process::CommandExt as _;
    cmd.arg0(argv0);
}

#[cfg(not(unix))]
fn set_arg0(_cmd: &mut Command, _argv0: &OsString) {}

/// Run `applet` through its configured backend.
///
/// On Unix the backend replaces the current process image, so this only
/// returns on failure.  Elsewhere the backend is spawned and its exit status
/// returned.
///
/// # Errors
///
/// Returns an error if no backend is configured, its program cannot be found,
/// or it cannot be executed.
pub fn launch(applet: Applet, config: &Config, argv: &[OsString]) -> Result<i32, BackendError> {
    let mut cmd = command(applet, config, argv)?;
    let program = PathBuf::from(cmd.get_program());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt as _;
        let source = cmd.exec();
        Err(BackendError::Exec { program, source })
    }

    #[cfg(not(unix))]
    {
        let status = cmd
            .status()
            .map_err(|source| BackendError::Exec { program, source })?;
        Ok(status.code().unwrap_or(1))
    }
}
