//! Creation path for platforms without the POSIX unique-name primitives.
//!
//! A candidate name is generated locally and the object is created with
//! `create_new` semantics, so a colliding candidate fails the creation call
//! instead of clobbering an existing object.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

#[cfg(not(feature = "uuid"))]
use crate::random_name::RandomName;
use crate::tempdir::TempDir;
use crate::tempfile::TempFile;
#[cfg(feature = "uuid")]
use uuid::Uuid;

/// Upper bound on directory creation attempts. The candidate generator does
/// not reserve a name, so another process can win the race between generation
/// and creation; the bound keeps that race from looping forever.
const MAX_ATTEMPTS: usize = 100;

/// Generates a fresh candidate path in the system temporary directory.
#[cfg(not(feature = "uuid"))]
fn candidate_path(name_prefix: &str) -> PathBuf {
    std::env::temp_dir().join(RandomName::new(name_prefix).as_ref())
}

/// Generates a fresh candidate path in the system temporary directory.
#[cfg(feature = "uuid")]
fn candidate_path(name_prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}{}", name_prefix, Uuid::new_v4()))
}

pub(crate) fn create_file(name_prefix: &str) -> io::Result<TempFile> {
    let path = candidate_path(name_prefix);
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&path)?;
    Ok(TempFile::new(path, file))
}

pub(crate) fn create_dir(name_prefix: &str) -> io::Result<TempDir> {
    for _ in 0..MAX_ATTEMPTS {
        let path = candidate_path(name_prefix);
        match std::fs::create_dir(&path) {
            Ok(()) => return Ok(TempDir::new(path)),
            // Another process claimed the candidate; try a fresh one.
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        "no unused candidate name left after 100 attempts",
    ))
}
