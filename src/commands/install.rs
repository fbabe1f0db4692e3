//! Command: install applet symlinks.
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::registry::PUBLIC_APPLETS;

/// Create `<dir>/<applet>` symlinks to the running executable and print
/// each created path.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined or any link
/// cannot be created.
pub fn run(dir: &Path, out: &mut dyn Write) -> Result<()> {
    let target = std::env::current_exe().context("failed to locate current executable")?;
    tracing::debug!("linking applets in {} to {}", dir.display(), target.display());
    for link in install_links(dir, &target)? {
        writeln!(out, "{}", link.display())?;
    }
    Ok(())
}

/// Create one symlink per public applet in `dir`, each pointing at `target`.
///
/// Existing files or links with an applet's name are replaced; directories
/// are not.  Returns the created link paths in table order.
///
/// # Errors
///
/// Returns an error if `dir` is not a directory or a link cannot be created.
pub fn install_links(dir: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut links = Vec::new();
    for name in PUBLIC_APPLETS.names() {
        let link = dir.join(name);
        if let Ok(meta) = std::fs::symlink_metadata(&link) {
            if meta.is_dir() {
                bail!("{} exists and is a directory", link.display());
            }
            std::fs::remove_file(&link)
                .with_context(|| format!("failed to remove {}", link.display()))?;
        }
        symlink(target, &link)
            .with_context(|| format!("failed to create symlink {}", link.display()))?;
        links.push(link);
    }
    Ok(links)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(all(test, unix))]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn creates_one_link_per_public_applet() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("magisk");
        std::fs::write(&target, "").unwrap();

        let links = install_links(dir.path(), &target).unwrap();
        assert_eq!(links, [dir.path().join("su"), dir.path().join("resetprop")]);
        for link in &links {
            assert_eq!(std::fs::read_link(link).unwrap(), target);
        }
        assert!(!dir.path().join("zygisk").exists());
    }

    #[test]
    fn replaces_existing_links() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("magisk");
        std::fs::write(dir.path().join("su"), "stale").unwrap();

        install_links(dir.path(), &target).unwrap();
        assert_eq!(std::fs::read_link(dir.path().join("su")).unwrap(), target);
    }

    #[test]
    fn refuses_to_replace_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("resetprop")).unwrap();
        let err = install_links(dir.path(), Path::new("/sbin/magisk")).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = install_links(&dir.path().join("nope"), Path::new("/sbin/magisk")).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
