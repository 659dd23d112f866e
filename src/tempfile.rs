use std::borrow::{Borrow, BorrowMut};
use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// A named temporary file that is removed from the filesystem
/// when the value is dropped.
pub struct TempFile {
    /// The handle opened together with the unique name.
    /// Used to write to or read from the file.
    file: ManuallyDrop<File>,

    /// The path of the contained file.
    path: PathBuf,
}

impl TempFile {
    /// Takes ownership of a freshly created file.
    ///
    /// The handle must refer to the object at `path`; both were produced by
    /// the same atomic creation call.
    pub(crate) fn new(path: PathBuf, file: File) -> Self {
        Self {
            file: ManuallyDrop::new(file),
            path,
        }
    }

    /// Returns the path of the underlying temporary file.
    ///
    /// ## Example
    ///
    /// ```
    /// let file = sync_tempfile::make_tempfile("example-");
    /// assert!(file.path().is_file());
    /// ```
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the temporary file, reporting any error.
    ///
    /// Dropping the value removes the file as well, but ignores failures.
    ///
    /// ## Example
    ///
    /// ```
    /// let file = sync_tempfile::make_tempfile("example-");
    /// let file_path = file.path().to_path_buf();
    ///
    /// file.close().unwrap();
    /// assert!(!file_path.exists());
    /// ```
    pub fn close(mut self) -> io::Result<()> {
        // Close the handle first; an open handle can prevent removal.
        drop(unsafe { ManuallyDrop::take(&mut self.file) });
        let path = std::mem::take(&mut self.path);
        std::mem::forget(self);
        std::fs::remove_file(path)
    }
}

/// Ensures the file handle is closed before the file itself is removed.
/// Removing a file with an open handle fails on some platforms.
impl Drop for TempFile {
    fn drop(&mut self) {
        drop(unsafe { ManuallyDrop::take(&mut self.file) });
        let _ = std::fs::remove_file(&self.path);
    }
}

impl Debug for TempFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.path)
    }
}

/// Allows implicit treatment of TempFile as a File.
impl Deref for TempFile {
    type Target = File;

    fn deref(&self) -> &Self::Target {
        &self.file
    }
}

/// Allows implicit treatment of TempFile as a mutable File.
impl DerefMut for TempFile {
    fn deref_mut(&mut self) -> &mut File {
        &mut self.file
    }
}

impl Borrow<File> for TempFile {
    fn borrow(&self) -> &File {
        &self.file
    }
}

impl BorrowMut<File> for TempFile {
    fn borrow_mut(&mut self) -> &mut File {
        &mut self.file
    }
}

impl AsRef<File> for TempFile {
    fn as_ref(&self) -> &File {
        &self.file
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Seek, SeekFrom, Write};

    #[test]
    fn handle_is_readable_and_writable() {
        let mut file = crate::make_tempfile("tempfile-rw-");
        file.write_all(b"scratch").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "scratch");
    }
}
