use std::collections::HashMap;
use std::fs::{read_to_string, write};
use std::path::PathBuf;

use crate::core::ports::selection::SelectionStore;
use crate::error::Error;

// One JSON object per device, "vote_{content_id}" -> paraphrase_id.
pub struct FileStore {
    path: PathBuf,
    votes: HashMap<String, String>,
}

impl FileStore {
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, Error> {
        let path = path.into();
        let votes = match read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, votes })
    }

    fn key(content_id: &str) -> String {
        format!("vote_{}", content_id)
    }
}

impl SelectionStore for FileStore {
    fn get(&mut self, content_id: &str) -> Result<Option<String>, Error> {
        Ok(self.votes.get(&Self::key(content_id)).cloned())
    }

    fn set(&mut self, content_id: &str, paraphrase_id: &str) -> Result<(), Error> {
        self.votes.insert(Self::key(content_id), paraphrase_id.to_owned());
        write(&self.path, serde_json::to_string_pretty(&self.votes)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("iikae_store_{}_{}.json", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let path = temp_path("missing");
        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("c1").unwrap(), None);
    }

    #[test]
    fn test_selection_survives_reopen() {
        let path = temp_path("reopen");
        let mut store = FileStore::open(&path).unwrap();
        store.set("c1", "p2").unwrap();
        store.set("c2", "p9").unwrap();
        drop(store);
        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("c1").unwrap(), Some("p2".into()));
        assert_eq!(store.get("c2").unwrap(), Some("p9".into()));
        assert_eq!(store.get("c3").unwrap(), None);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_keys_match_browser_storage_format() {
        let path = temp_path("keys");
        let mut store = FileStore::open(&path).unwrap();
        store.set("abc", "p1").unwrap();
        let raw = read_to_string(&path).unwrap();
        let map: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.get("vote_abc"), Some(&"p1".to_string()));
        std::fs::remove_file(&path).unwrap();
    }
}
