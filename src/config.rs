use crate::app_dirs::AppDirs;
use crate::game::Rules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted defaults; command line flags win over these
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub word_file: Option<PathBuf>,
    pub pack: String,
    pub lives: u8,
    pub seconds_per_word: u32,
    pub words_to_find: usize,
    pub max_passes: usize,
}

impl Default for Config {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            word_file: None,
            pack: "english".to_string(),
            lives: rules.lives,
            seconds_per_word: rules.seconds_per_word,
            words_to_find: rules.words_to_find,
            max_passes: rules.max_passes,
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            lives: self.lives,
            seconds_per_word: self.seconds_per_word,
            words_to_find: self.words_to_find,
            max_passes: self.max_passes,
        }
        .sanitized()
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
