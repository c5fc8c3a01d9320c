//! File-backed slot implementation
//!
//! Each key lives in its own `<key>.json` file under a directory, so the
//! persisted session survives a process restart.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::SessionSlot;
use crate::shared::errors::StorageError;

#[derive(Debug, Clone)]
pub struct FileSessionSlot {
    dir: PathBuf,
}

impl FileSessionSlot {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; anything path-like is flattened.
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

#[async_trait]
impl SessionSlot for FileSessionSlot {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let dir = self.dir.clone();
        let target = path.clone();
        let value = value.to_owned();

        // Each write gets its own temp file, then an atomic rename over the
        // target; overlapping writes both succeed and the last one wins.
        tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(value.as_bytes())?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)??;

        debug!("Stored slot entry {} at {}", key, path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn entries_survive_a_new_handle() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("session");

        let slot = FileSessionSlot::new(&dir);
        assert_eq!(slot.get("hospital_user").await.unwrap(), None);
        slot.set("hospital_user", "{\"id\":\"1\"}").await.unwrap();

        let reopened = FileSessionSlot::new(&dir);
        assert_eq!(
            reopened.get("hospital_user").await.unwrap().as_deref(),
            Some("{\"id\":\"1\"}")
        );
        assert!(dir.join("hospital_user.json").exists());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let slot = FileSessionSlot::new(tmp.path());

        slot.set("k", "v").await.unwrap();
        slot.remove("k").await.unwrap();
        slot.remove("k").await.unwrap();
        assert_eq!(slot.get("k").await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_writes_to_one_key_all_succeed() {
        let tmp = tempfile::tempdir().unwrap();
        let slot = std::sync::Arc::new(FileSessionSlot::new(tmp.path()));

        for round in 0..100 {
            let first = format!("{{\"round\":{},\"by\":\"doctor\"}}", round);
            let second = format!("{{\"round\":{},\"by\":\"nurse\"}}", round);
            let (a, b) = {
                let (s1, s2) = (slot.clone(), slot.clone());
                let (v1, v2) = (first.clone(), second.clone());
                tokio::join!(
                    tokio::spawn(async move { s1.set("hospital_user", &v1).await }),
                    tokio::spawn(async move { s2.set("hospital_user", &v2).await }),
                )
            };
            a.unwrap().unwrap();
            b.unwrap().unwrap();

            let stored = slot.get("hospital_user").await.unwrap().unwrap();
            assert!(stored == first || stored == second, "round {}: {}", round, stored);
        }

        // No temp files left behind
        let entries = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let slot = FileSessionSlot::new("/var/lib/erp");
        assert_eq!(
            slot.path_for("../etc/passwd"),
            PathBuf::from("/var/lib/erp/___etc_passwd.json")
        );
    }
}
