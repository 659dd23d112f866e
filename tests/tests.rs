use std::collections::HashSet;
use std::io::Write;
use sync_tempfile::{
    make_tempdir, make_tempfile, try_make_tempdir, try_make_tempfile, TempFile,
    DEFAULT_DIR_PREFIX, DEFAULT_FILE_PREFIX,
};
use uuid::Uuid;

#[test]
fn file_matches_expected_pattern() {
    let file = make_tempfile("test-pattern-");
    assert!(file.path().is_file());

    let name = file.path().file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("test-pattern-"));

    // The POSIX primitives replace exactly six placeholder characters.
    #[cfg(unix)]
    assert_eq!(name.len(), "test-pattern-".len() + 6);
}

#[test]
fn file_is_deleted_when_dropping() {
    let path = {
        let file = make_tempfile("test-drop-");
        assert!(file.path().is_file());
        file.path().to_path_buf()
    };

    // File is now deleted.
    assert!(!path.is_file());
}

#[test]
fn dir_exists_while_owner_is_alive() {
    let dir = make_tempdir("test-dir-");
    let dir_path = dir.path().to_path_buf();

    // The directory exists while the owner is alive.
    assert!(dir_path.is_dir());

    // Deletes the directory.
    drop(dir);

    assert!(!dir_path.is_dir());
}

#[test]
fn sequential_files_are_unique() {
    let files: Vec<TempFile> = (0..256).map(|_| make_tempfile("test-unique-")).collect();

    let mut paths = HashSet::new();
    for file in &files {
        assert!(paths.insert(file.path().to_path_buf()));
    }
}

#[test]
fn sequential_dirs_are_unique() {
    let dirs: Vec<_> = (0..64).map(|_| make_tempdir("test-unique-dir-")).collect();

    let paths: HashSet<_> = dirs.iter().map(|dir| dir.path().to_path_buf()).collect();
    assert_eq!(paths.len(), dirs.len());
}

fn pass_through(file: TempFile) -> TempFile {
    file
}

#[test]
fn moving_the_owner_does_not_remove_the_file() {
    let file = make_tempfile("test-move-");
    let path = file.path().to_path_buf();

    // Ownership transfers without touching the filesystem.
    let file = pass_through(file);
    assert!(path.is_file());

    let mut held = Vec::new();
    held.push(file);
    assert!(path.is_file());

    // Removal happens exactly when the final owner is dropped.
    held.clear();
    assert!(!path.is_file());
}

#[test]
fn bytes_written_through_the_handle_are_on_disk() {
    let mut file = make_tempfile("test-write-");
    file.write_all(b"hello world").unwrap();
    file.sync_all().unwrap();

    let contents = std::fs::read(file.path()).unwrap();
    assert_eq!(contents, b"hello world");
}

#[test]
fn close_removes_eagerly_and_reports_success() {
    let file = make_tempfile("test-close-");
    let file_path = file.path().to_path_buf();
    file.close().unwrap();
    assert!(!file_path.exists());

    let dir = make_tempdir("test-close-");
    let dir_path = dir.path().to_path_buf();
    dir.close().unwrap();
    assert!(!dir_path.exists());
}

#[test]
fn default_prefixes_distinguish_files_from_dirs() {
    let file = make_tempfile(DEFAULT_FILE_PREFIX);
    let dir = make_tempdir(DEFAULT_DIR_PREFIX);

    let file_name = file.path().file_name().unwrap().to_str().unwrap();
    let dir_name = dir.path().file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with(DEFAULT_FILE_PREFIX));
    assert!(dir_name.starts_with(DEFAULT_DIR_PREFIX));
}

#[test]
fn try_make_tempfile_returns_none_on_failure() {
    // Routing the name into a directory that does not exist forces the
    // creation call itself to fail.
    let prefix = format!("missing-{}/file-", Uuid::new_v4());
    assert!(try_make_tempfile(&prefix).is_none());
}

#[test]
fn try_make_tempdir_returns_none_on_failure() {
    let prefix = format!("missing-{}/dir-", Uuid::new_v4());
    assert!(try_make_tempdir(&prefix).is_none());
}

#[test]
#[should_panic(expected = "could not create temporary file")]
fn make_tempfile_panics_on_failure() {
    let prefix = format!("missing-{}/file-", Uuid::new_v4());
    let _ = make_tempfile(prefix);
}

#[test]
#[should_panic(expected = "could not create temporary directory")]
fn make_tempdir_panics_on_failure() {
    let prefix = format!("missing-{}/dir-", Uuid::new_v4());
    let _ = make_tempdir(prefix);
}

#[cfg(unix)]
#[test]
fn fatal_error_message_embeds_os_description() {
    let prefix = format!("missing-{}/dir-", Uuid::new_v4());
    let panic = std::panic::catch_unwind(|| make_tempdir(prefix)).unwrap_err();

    let message = panic.downcast_ref::<String>().unwrap();
    assert!(message.contains("could not create temporary directory"));
    assert!(message.contains("No such file or directory"));
}
