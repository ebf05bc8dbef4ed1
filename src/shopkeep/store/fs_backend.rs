use super::backend::StorageBackend;
use crate::error::{Result, ShopkeepError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const SLOT_FILENAME: &str = "products.json";

pub struct FsBackend {
    root: PathBuf,
    slot_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slot_name: SLOT_FILENAME.to_string(),
        }
    }

    pub fn with_slot_name(mut self, name: &str) -> Self {
        self.slot_name = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShopkeepError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShopkeepError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let tmp_file = self.root.join(format!(".products-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, payload).map_err(ShopkeepError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.slot_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShopkeepError::Io(e));
        }

        Ok(())
    }

    fn slot_path(&self) -> PathBuf {
        self.root.join(&self.slot_name)
    }
}
