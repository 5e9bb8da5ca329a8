use crate::config::ArtifactConfig;
use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

/// per-run artifact directory with temporary-file tracking
#[derive(Debug)]
pub struct Session {
    dir: PathBuf,
    keep_temps: bool,
    temps: RefCell<Vec<PathBuf>>,
}

impl Session {
    pub fn new(cfg: &ArtifactConfig) -> anyhow::Result<Self> {
        fs::create_dir_all(&cfg.target_dir)?;
        Ok(Self {
            dir: cfg.target_dir.clone(),
            keep_temps: cfg.keep_temps,
            temps: RefCell::new(Vec::new()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// path of an artifact under the target directory
    pub fn artifact(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.join(name.as_ref())
    }

    /// like `artifact`, but the file is removed on cleanup unless --keep-temps
    pub fn temp(&self, name: impl AsRef<Path>) -> PathBuf {
        let path = self.artifact(name);
        self.temps.borrow_mut().push(path.clone());
        path
    }

    pub fn cleanup(self) {
        if self.keep_temps {
            return;
        }
        for path in self.temps.borrow().iter() {
            // the file may never have been created, skip it
            let _ = fs::remove_file(path);
        }
    }
}
