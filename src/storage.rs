use crate::model::Roster;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge le roster depuis le support.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Sauvegarde de manière atomique (membres + planning courant).
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;

    /// Roster vide si le support n'existe pas encore (premier lancement).
    fn load_or_default(&self) -> anyhow::Result<Roster>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let roster: Roster =
            serde_json::from_slice(&data).with_context(|| "parsing roster file")?;
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
        let json = serde_json::to_vec_pretty(roster)?;
        let mut tmp = NamedTempFile::new_in(if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        })
        .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }

    fn load_or_default(&self) -> anyhow::Result<Roster> {
        if !self.path.exists() {
            return Ok(Roster::default());
        }
        self.load()
    }
}
