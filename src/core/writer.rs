//! Persisting filtered cookie lines
//!
//! Writing back over the source file goes through a temporary file in the
//! target's own directory followed by a rename, so readers only ever see
//! the old contents or the complete new contents. The temp file must not
//! live in the system temp dir: a rename across filesystems is not atomic.

use crate::core::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How the destination should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum WriteMode {
    /// Destination is the source file: temp file + atomic rename
    InPlace,
    /// Destination is a fresh path: create parents, then write directly
    NewFile,
}

impl WriteMode {
    /// Picks the mode for writing `output` after reading `input`.
    ///
    /// Paths are compared lexically first, then by canonical form when both
    /// exist, so `./cookies.txt` and `cookies.txt` count as the same file.
    pub fn for_paths(input: &Path, output: &Path) -> Self {
        if input == output {
            return Self::InPlace;
        }
        match (input.canonicalize(), output.canonicalize()) {
            (Ok(a), Ok(b)) if a == b => Self::InPlace,
            _ => Self::NewFile,
        }
    }
}

/// Directory in which the temporary file for `target` is created.
///
/// Always the target's parent; a bare file name resolves to the current
/// directory.
pub fn temp_dir_for(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes `lines` verbatim to `target` using the given mode.
pub fn write_lines<S: AsRef<str>>(lines: &[S], target: &Path, mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::InPlace => replace_atomically(lines, target),
        WriteMode::NewFile => write_new_file(lines, target),
    }
}

fn write_all_lines<S: AsRef<str>>(out: &mut impl Write, lines: &[S]) -> std::io::Result<()> {
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
    }
    out.flush()
}

/// The file an in-place write actually replaces.
///
/// Symlinks are followed so the rename lands on the linked file and the
/// link itself survives. Falls back to `target` when it cannot be resolved.
pub fn resolve_in_place_target(target: &Path) -> PathBuf {
    target
        .canonicalize()
        .unwrap_or_else(|_| target.to_path_buf())
}

/// Temp file + rename within the same directory.
fn replace_atomically<S: AsRef<str>>(lines: &[S], target: &Path) -> Result<()> {
    let resolved = resolve_in_place_target(target);
    let dir = temp_dir_for(&resolved);
    let mut temp = tempfile::Builder::new()
        .prefix(".cookies-")
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(|e| Error::io(&dir, e))?;
    debug!("Staging output in {}", temp.path().display());

    write_all_lines(&mut temp, lines).map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    match temp.persist(&resolved) {
        Ok(_) => {
            info!("Atomically replaced {}", resolved.display());
            Ok(())
        }
        Err(err) => {
            // Best-effort cleanup; the rename failure is what gets reported
            let stray = err.file.path().to_path_buf();
            if let Err(cleanup) = err.file.close() {
                warn!(
                    "Could not remove temporary file {}: {cleanup}",
                    stray.display()
                );
            }
            Err(Error::io(target, err.error))
        }
    }
}

/// Creates parent directories if needed, then writes directly.
fn write_new_file<S: AsRef<str>>(lines: &[S], target: &Path) -> Result<()> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        create_parent_dirs(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut file = std::fs::File::create(target).map_err(|e| Error::io(target, e))?;
    write_all_lines(&mut file, lines).map_err(|e| Error::io(target, e))?;
    info!("Wrote {}", target.display());
    Ok(())
}

fn create_parent_dirs(dir: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // Cookie files are credentials
        builder.recursive(true);
        builder.create(dir)
    }

    #[cfg(not(unix))]
    {
        std::fs::create_dir_all(dir)
    }
}
