use crate::utils;
use crate::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the pkg-config file generated by the y3c build.
const PC_FILENAME: &str = "y3c.pc";
/// Key prefix marking dependency lines that must not be advertised.
const PRIVATE_REQUIRES: &str = "Requires.private";

/// Removes `Requires.private` lines from the installed `y3c.pc`.
///
/// Intended to run as a `meson install` script: the install prefix is taken
/// from `MESON_INSTALL_PREFIX` and redirected under `DESTDIR` when a staging
/// root is in effect.
///
/// # Errors
///
/// Returns an error if:
/// - `MESON_INSTALL_PREFIX` is not set
/// - No `y3c.pc` exists under the effective install root
/// - The file cannot be read or written back
pub fn strip_private_requires() -> Result<()> {
    let prefix =
        env::var("MESON_INSTALL_PREFIX").context("MESON_INSTALL_PREFIX is not set")?;
    let destdir = env::var("DESTDIR").ok();
    let root = utils::effective_install_root(&prefix, destdir.as_deref());

    strip_private_requires_under(&root)
}

/// Removes `Requires.private` lines from the `y3c.pc` found under `root`.
///
/// # Errors
///
/// Returns an error if no `y3c.pc` exists under `root`, or if the file
/// cannot be read or written back. When discovery fails the file is never
/// opened, so nothing on disk is modified.
pub fn strip_private_requires_under(root: &Path) -> Result<()> {
    utils::print_header("Removing private requirements from y3c.pc...");

    let pc_path = find_pc_file(root)?;
    utils::print_step("Rewriting", &pc_path.display().to_string());

    let data = fs::read_to_string(&pc_path)
        .with_context(|| format!("Failed to read {}", pc_path.display()))?;
    fs::write(&pc_path, filter_private_requires(&data))
        .with_context(|| format!("Failed to write {}", pc_path.display()))?;

    utils::print_step_success(&pc_path.display().to_string());
    utils::print_success("✓ Private requirements removed!");
    Ok(())
}

/// Locates the installed `y3c.pc` anywhere beneath `root`.
///
/// The install layout places exactly one copy; the first match wins.
fn find_pc_file(root: &Path) -> Result<PathBuf> {
    let pattern = root.join("**").join(PC_FILENAME);
    let pattern = pattern.to_string_lossy();

    glob::glob(&pattern)?
        .flatten()
        .next()
        .ok_or_else(|| anyhow::anyhow!("No {PC_FILENAME} found under {}", root.display()))
}

/// Drops every line starting with `Requires.private`, keeping all other
/// lines byte-identical and in order. Line terminators are preserved, so a
/// file without a trailing newline stays that way.
fn filter_private_requires(data: &str) -> String {
    data.split_inclusive('\n')
        .filter(|line| !line.starts_with(PRIVATE_REQUIRES))
        .collect()
}
