//! Creation path for platforms with the POSIX unique-name primitives.
//!
//! `mkstemp` and `mkdtemp` complete a caller-supplied template in place and
//! atomically create the named object, so reserving the name and creating the
//! object is a single call.

use std::ffi::{CString, OsString};
use std::fs::File;
use std::io;
use std::os::unix::ffi::OsStringExt;
use std::os::unix::io::FromRawFd;
use std::path::PathBuf;

use crate::tempdir::TempDir;
use crate::tempfile::TempFile;

/// Placeholder overwritten in place by `mkstemp`/`mkdtemp`.
const RANDOM_PATTERN: &str = "XXXXXX";

/// Environment variables consulted for the temporary directory, in priority
/// order.
const ENV_VARIABLES: [&str; 4] = ["TMPDIR", "TMP", "TEMP", "TEMPDIR"];

/// Resolves the base temporary directory.
///
/// The first variable that is set wins, even when set to an empty string;
/// `/tmp` is the default when none is.
fn temp_directory() -> PathBuf {
    for variable in ENV_VARIABLES {
        if let Some(path) = std::env::var_os(variable) {
            return PathBuf::from(path);
        }
    }
    PathBuf::from("/tmp")
}

/// Builds the `<tmp-dir>/<prefix>XXXXXX` template completed by the OS call.
///
/// The prefix is inserted verbatim; it is the caller's job to supply something
/// that is valid inside a path component.
fn make_template(name_prefix: &str) -> io::Result<CString> {
    let mut path = temp_directory();
    path.push(format!("{}{}", name_prefix, RANDOM_PATTERN));
    CString::new(path.into_os_string().into_vec())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
}

pub(crate) fn create_file(name_prefix: &str) -> io::Result<TempFile> {
    let template = make_template(name_prefix)?;

    // `mkstemp` overwrites the placeholder bytes and returns a handle opened
    // for reading and writing in the same call.
    let raw = template.into_raw();
    let fd = unsafe { libc::mkstemp(raw) };
    let template = unsafe { CString::from_raw(raw) };
    if fd == -1 {
        return Err(io::Error::last_os_error());
    }

    let path = PathBuf::from(OsString::from_vec(template.into_bytes()));
    let file = unsafe { File::from_raw_fd(fd) };
    Ok(TempFile::new(path, file))
}

pub(crate) fn create_dir(name_prefix: &str) -> io::Result<TempDir> {
    let template = make_template(name_prefix)?;

    // `mkdtemp` returns the template pointer itself; reclaim the allocation
    // before inspecting the outcome.
    let raw = template.into_raw();
    let ptr = unsafe { libc::mkdtemp(raw) };
    let template = unsafe { CString::from_raw(raw) };
    if ptr.is_null() {
        return Err(io::Error::last_os_error());
    }

    let path = PathBuf::from(OsString::from_vec(template.into_bytes()));
    Ok(TempDir::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_keeps_prefix_and_placeholder() {
        let template = make_template("unit-").unwrap();
        let text = template.to_str().unwrap();
        assert!(text.ends_with("unit-XXXXXX"));
    }

    #[test]
    fn template_rejects_interior_nul() {
        assert!(make_template("nul\0byte-").is_err());
    }
}
