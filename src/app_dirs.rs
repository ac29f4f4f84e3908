use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        match ProjectDirs::from("", "", "hintword") {
            Some(pd) => pd.config_dir().join("config.json"),
            None => PathBuf::from("hintword_config.json"),
        }
    }

    pub fn log_path() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("hintword")
                .join("hintword.log")
        } else {
            match ProjectDirs::from("", "", "hintword") {
                Some(pd) => pd.data_local_dir().join("hintword.log"),
                None => PathBuf::from("hintword.log"),
            }
        }
    }
}
