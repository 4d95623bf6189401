//! File-backed key-value store adapter.
//!
//! One file per key inside a capability-scoped directory. Writes go through a
//! temp-file-and-rename sequence so a value is never partially written, which
//! matters because the façade rewrites the entire user collection on every
//! mutation.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::key_value_store::{KeyValueStore, StorageError};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Durable store persisting each key as a file under one directory.
#[derive(Debug)]
pub struct FileStore {
    dir: Dir,
}

impl FileStore {
    /// Open a store rooted at an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the directory cannot be opened.
    pub fn open(root: impl AsRef<std::path::Path>) -> Result<Self, StorageError> {
        let dir = Dir::open_ambient_dir(root.as_ref(), cap_std::ambient_authority()).map_err(
            |err| StorageError::Backend {
                message: format!("cannot open store directory: {err}"),
            },
        )?;
        Ok(Self { dir })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let name = validate_key(key)?;
        match self.dir.read_to_string(name) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read {
                key: key.to_owned(),
                message: err.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let name = validate_key(key)?;
        write_atomic(&self.dir, name, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let name = validate_key(key)?;
        match self.dir.remove_file(name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Write {
                key: key.to_owned(),
                message: err.to_string(),
            }),
        }
    }
}

/// Keys must be plain file names: no separators, no traversal components.
fn validate_key(key: &str) -> Result<&str, StorageError> {
    let plain = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.contains('\0');
    if plain {
        Ok(key)
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_owned(),
        })
    }
}

/// Writes contents to a file atomically using a temp file and rename.
///
/// The value lands in a hidden temporary file in the same directory, is
/// synced, then renamed over the target. The target file is never partially
/// written.
fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> Result<(), StorageError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    );

    write_to_temp_file(dir, &tmp_name, file_name, contents)?;
    rename_temp_to_target(dir, &tmp_name, file_name)?;
    sync_parent_directory(dir);

    Ok(())
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target_name: &str,
    contents: &str,
) -> Result<(), StorageError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| StorageError::Write {
            key: target_name.to_owned(),
            message: err.to_string(),
        })?;

    if let Err(err) = file.write_all(contents.as_bytes()) {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(StorageError::Write {
            key: target_name.to_owned(),
            message: err.to_string(),
        });
    }

    if let Err(err) = file.sync_all() {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(StorageError::Write {
            key: target_name.to_owned(),
            message: err.to_string(),
        });
    }

    Ok(())
}

fn rename_temp_to_target(dir: &Dir, tmp_name: &str, target_name: &str) -> Result<(), StorageError> {
    if let Err(err) = rename_temp_to_target_impl(dir, tmp_name, target_name) {
        // Best-effort cleanup of the temp file on rename failure.
        if dir.remove_file(tmp_name).is_err() {
            // Ignore cleanup failures.
        }
        return Err(StorageError::Write {
            key: target_name.to_owned(),
            message: err.to_string(),
        });
    }
    Ok(())
}

#[cfg(windows)]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_temp_to_target_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_parent_directory(parent: &Dir) {
    // Best-effort directory sync; ignore failures.
    if parent.open(".").and_then(|dir| dir.sync_all()).is_err() {
        // Ignore sync failures.
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Creates a unique temporary directory and opens a store over it.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created or opened.
    fn temp_store(tag: &str) -> FileStore {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let root = std::env::temp_dir().join(format!(
            "lendbook-store-{tag}-{}-{suffix}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).expect("create temp dir");
        FileStore::open(&root).expect("open store")
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let store = temp_store("missing");
        assert_eq!(store.get("absent").expect("get succeeds"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = temp_store("roundtrip");
        store.set("lendbook.token", "session-1").expect("set succeeds");
        assert_eq!(
            store.get("lendbook.token").expect("get succeeds").as_deref(),
            Some("session-1")
        );
    }

    #[test]
    fn set_atomically_replaces_previous_value() {
        let store = temp_store("replace");
        store.set("k", "first").expect("set succeeds");
        store.set("k", "second").expect("set succeeds");
        assert_eq!(
            store.get("k").expect("get succeeds").as_deref(),
            Some("second")
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let store = temp_store("remove");
        store.set("k", "v").expect("set succeeds");
        store.remove("k").expect("first remove succeeds");
        store.remove("k").expect("second remove succeeds");
        assert_eq!(store.get("k").expect("get succeeds"), None);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("..")]
    #[case("nested/key")]
    #[case("nested\\key")]
    fn traversal_keys_are_rejected(#[case] key: &str) {
        let store = temp_store("validate");
        let err = store.set(key, "v").expect_err("invalid key must fail");
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }

    #[test]
    fn values_survive_reopening_the_store() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        let root = std::env::temp_dir().join(format!(
            "lendbook-store-reopen-{}-{suffix}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).expect("create temp dir");

        let store = FileStore::open(&root).expect("open store");
        store.set("k", "persisted").expect("set succeeds");
        drop(store);

        let reopened = FileStore::open(&root).expect("reopen store");
        assert_eq!(
            reopened.get("k").expect("get succeeds").as_deref(),
            Some("persisted")
        );
    }
}
