//! Command: print version information.
use std::io::Write;

use anyhow::Result;

/// Version string, from `MAGISK_VERSION` at build time or the crate version.
#[must_use]
pub fn version_string() -> &'static str {
    option_env!("MAGISK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Numeric version code: `major * 1000 + minor * 100 + patch`.
#[must_use]
pub fn version_code() -> u32 {
    let part = |s: &str| s.parse::<u32>().unwrap_or(0);
    part(env!("CARGO_PKG_VERSION_MAJOR")) * 1000
        + part(env!("CARGO_PKG_VERSION_MINOR")) * 100
        + part(env!("CARGO_PKG_VERSION_PATCH"))
}

/// `-c`: version string and code.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn full(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}:MAGISK ({})", version_string(), version_code())?;
    Ok(())
}

/// `-v`: version string.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn short(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}:MAGISK", version_string())?;
    Ok(())
}

/// `-V`: version code.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn code(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", version_code())?;
    Ok(())
}
