//! # sync-tempfile
//!
//! Provides the [`TempFile`] and [`TempDir`] structs, synchronous owners of
//! uniquely named temporary files and directories that are automatically
//! deleted when the value is dropped.
//!
//! ```
//! use sync_tempfile::make_tempfile;
//!
//! let file = make_tempfile("example-");
//! let file_path = file.path().to_path_buf();
//!
//! // The file exists.
//! assert!(file_path.is_file());
//!
//! // Deletes the file.
//! drop(file);
//!
//! // The file was removed.
//! assert!(!file_path.exists());
//! ```
//!
//! On platforms with the POSIX unique-name primitives, names are allocated with
//! `mkstemp`/`mkdtemp` under the first of the `TMPDIR`, `TMP`, `TEMP` or
//! `TEMPDIR` environment variables that is set, or `/tmp` if none is. On other
//! platforms a candidate name is generated in [`std::env::temp_dir`] and the
//! object is created with `create_new` semantics.
//!
//! ## Features
//!
//! * `uuid` - Enables candidate name generation based on the
//!            [`uuid`](https://crates.io/crates/uuid) crate on platforms
//!            without a POSIX-style unique-name primitive.

// Document crate features on docs.rs.
#![cfg_attr(docsrs, feature(doc_cfg))]
// Required for closing the file handle before the file is removed.
#![allow(unsafe_code)]

mod tempdir;
mod tempfile;

#[cfg(unix)]
#[path = "posix.rs"]
mod sys;

#[cfg(not(unix))]
#[path = "fallback.rs"]
mod sys;

#[cfg(all(not(unix), not(feature = "uuid")))]
mod random_name;

pub use tempdir::TempDir;
pub use tempfile::TempFile;

/// Default name prefix for temporary files.
pub const DEFAULT_FILE_PREFIX: &str = "stmp-file-";

/// Default name prefix for temporary directories.
pub const DEFAULT_DIR_PREFIX: &str = "stmp-dir-";

/// Attempts to create a temporary file, or returns `None` if an error occurred.
///
/// The file follows the pattern `<tmp-dir>/<name_prefix><random>`, where
/// `<tmp-dir>` is the value of the `TMPDIR`, `TMP`, `TEMP` or `TEMPDIR`
/// environment variable if any is set, or `/tmp` otherwise, and `<random>` is a
/// sequence of six characters chosen by the operating system. On platforms
/// without a POSIX-style unique-name primitive the file is created in
/// [`std::env::temp_dir`] instead.
///
/// The file is created and opened for reading and writing in a single step, so
/// there is no window in which another caller could claim the name.
///
/// All failure modes collapse to `None`. Use [`make_tempfile`] to fail loudly
/// with the underlying error instead.
///
/// ## Arguments
///
/// * `name_prefix` - Inserted verbatim between the temporary directory and the
///   generated characters; must be valid as part of a path component.
///
/// ## Example
///
/// ```
/// let file = sync_tempfile::try_make_tempfile(sync_tempfile::DEFAULT_FILE_PREFIX).unwrap();
/// assert!(file.path().is_file());
/// ```
pub fn try_make_tempfile<P: AsRef<str>>(name_prefix: P) -> Option<TempFile> {
    sys::create_file(name_prefix.as_ref()).ok()
}

/// Like [`try_make_tempfile`], but panics if the temporary file could not be
/// created. The panic message embeds the operating system's description of the
/// failure.
///
/// ## Example
///
/// ```
/// let file = sync_tempfile::make_tempfile("example-");
/// let file_path = file.path().to_path_buf();
/// assert!(file_path.is_file());
///
/// // Deletes the file.
/// drop(file);
/// assert!(!file_path.exists());
/// ```
pub fn make_tempfile<P: AsRef<str>>(name_prefix: P) -> TempFile {
    match sys::create_file(name_prefix.as_ref()) {
        Ok(file) => file,
        Err(err) => panic!("could not create temporary file: {}", err),
    }
}

/// Attempts to create a temporary directory, or returns `None` if an error
/// occurred.
///
/// The directory follows the same naming pattern as [`try_make_tempfile`]. On
/// platforms without a POSIX-style unique-name primitive, up to 100 candidate
/// names are tried; a name that already exists is retried with a fresh
/// candidate, any other creation error gives up immediately.
///
/// All failure modes collapse to `None`. Use [`make_tempdir`] to fail loudly
/// with the underlying error instead.
///
/// ## Arguments
///
/// * `name_prefix` - Inserted verbatim between the temporary directory and the
///   generated characters; must be valid as part of a path component.
///
/// ## Example
///
/// ```
/// let dir = sync_tempfile::try_make_tempdir(sync_tempfile::DEFAULT_DIR_PREFIX).unwrap();
/// assert!(dir.path().is_dir());
/// ```
pub fn try_make_tempdir<P: AsRef<str>>(name_prefix: P) -> Option<TempDir> {
    sys::create_dir(name_prefix.as_ref()).ok()
}

/// Like [`try_make_tempdir`], but panics if the temporary directory could not
/// be created. The panic message embeds the operating system's description of
/// the failure.
///
/// ## Example
///
/// ```
/// let dir = sync_tempfile::make_tempdir("example-");
/// let dir_path = dir.path().to_path_buf();
/// assert!(dir_path.is_dir());
///
/// // Deletes the directory.
/// drop(dir);
/// assert!(!dir_path.exists());
/// ```
pub fn make_tempdir<P: AsRef<str>>(name_prefix: P) -> TempDir {
    match sys::create_dir(name_prefix.as_ref()) {
        Ok(dir) => dir,
        Err(err) => panic!("could not create temporary directory: {}", err),
    }
}
