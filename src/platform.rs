//! Process-wide platform setup performed during priming.

/// Set the file-creation mask to `0` so applets create files with exactly
/// the modes they request.  No-op on non-Unix targets.
pub fn clear_umask() {
    #[cfg(unix)]
    {
        use nix::sys::stat::{Mode, umask};
        let previous = umask(Mode::empty());
        tracing::trace!("umask cleared (was {:o})", previous.bits());
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use nix::sys::stat::{Mode, umask};

    #[test]
    fn clear_umask_sets_zero() {
        let original = umask(Mode::from_bits_truncate(0o022));
        clear_umask();
        let observed = umask(original);
        assert!(observed.is_empty(), "umask should be 0, got {observed:?}");
    }
}
