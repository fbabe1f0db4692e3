//! Command: list applet names.
use std::io::Write;

use anyhow::Result;

use crate::registry::{Applet, PUBLIC_APPLETS};

/// Names printed by `--list`: the umbrella, then the public table in order.
pub fn names() -> impl Iterator<Item = &'static str> {
    std::iter::once(Applet::Magisk.name()).chain(PUBLIC_APPLETS.names())
}

/// Print one applet name per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut dyn Write) -> Result<()> {
    for name in names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn private_applets_are_not_listed() {
        assert!(!names().any(|n| n == Applet::Zygisk.name()));
    }

    #[test]
    fn umbrella_is_listed_first() {
        assert_eq!(names().next(), Some("magisk"));
    }
}
