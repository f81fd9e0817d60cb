use crate::save::Document;
use crate::save::Store;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Pretty-printed JSON file holding the whole club.
///
/// Writes go to a sibling temp file first and rename into place, so a
/// crash mid-write never leaves a torn snapshot behind.
pub struct JsonStore {
    path: PathBuf,
}

impl From<PathBuf> for JsonStore {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl JsonStore {
    pub fn path(&self) -> &Path {
        &self.path
    }
    fn scratch(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl Store for JsonStore {
    fn load(&self) -> anyhow::Result<Document> {
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("parse {}", self.path.display()))
    }

    fn save(&self, document: &Document) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(document).context("serialize club")?;
        std::fs::write(self.scratch(), json)
            .with_context(|| format!("write {}", self.scratch().display()))?;
        std::fs::rename(self.scratch(), &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }

    fn done(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Player;

    fn scratch_store() -> JsonStore {
        let path = std::env::temp_dir().join(format!("homegame-{}.json", uuid::Uuid::new_v4()));
        JsonStore::from(path)
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = scratch_store();
        let document = Document::from((vec![Player::from("alice")], vec![]));
        store.save(&document).expect("save");
        assert!(store.done());
        assert_eq!(store.load().expect("load"), document);
        std::fs::remove_file(store.path()).ok();
    }

    #[test]
    fn missing_file_is_not_done() {
        let store = scratch_store();
        assert!(!store.done());
        assert!(store.load().is_err());
    }

    #[test]
    fn malformed_file_fails_to_load() {
        let store = scratch_store();
        std::fs::write(store.path(), "{\"players\": []}").expect("write");
        assert!(store.load().is_err());
        std::fs::remove_file(store.path()).ok();
    }
}
