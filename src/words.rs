use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static PACK_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/packs");

/// Errors raised while loading or validating a word pool
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("unable to read word file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse word pool: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown word pack {0:?}")]
    UnknownPack(String),
    #[error("{list}: entry #{position} has an empty word")]
    EmptyWord { list: String, position: usize },
    #[error("{list}: word {word:?} has no hints")]
    NoHints { list: String, word: String },
    #[error("{list} has no words")]
    EmptyList { list: String },
}

/// A hidden word and the clues that lead to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub hints: Vec<String>,
}

impl WordEntry {
    pub fn new<S: Into<String>>(word: S, hints: Vec<String>) -> Self {
        Self {
            word: word.into(),
            hints,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub words: Vec<WordEntry>,
}

impl WordList {
    /// Display name used in logs and error messages
    pub fn label(&self, position: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("list {}", position + 1),
        }
    }
}

/// All word lists a game can draw a round from.
///
/// Deserializing goes through [`WordPool::new`], so a decoded pool is
/// always normalized and validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWordPool")]
pub struct WordPool {
    #[serde(rename = "wordLists")]
    pub word_lists: Vec<WordList>,
}

/// Document shape before validation
#[derive(Deserialize)]
struct RawWordPool {
    #[serde(rename = "wordLists")]
    word_lists: Vec<WordList>,
}

impl TryFrom<RawWordPool> for WordPool {
    type Error = PoolError;

    fn try_from(raw: RawWordPool) -> Result<Self, Self::Error> {
        WordPool::new(raw.word_lists)
    }
}

impl WordPool {
    /// Builds a pool from already constructed lists, normalizing and validating every entry.
    pub fn new(word_lists: Vec<WordList>) -> Result<Self, PoolError> {
        let mut pool = Self { word_lists };
        pool.normalize();
        pool.validate()?;
        Ok(pool)
    }

    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        // parse the raw shape first so validation errors keep their variant
        let raw: RawWordPool = serde_json::from_str(json)?;
        Self::new(raw.word_lists)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| PoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pool = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            lists = pool.word_lists.len(),
            "loaded word pool"
        );
        Ok(pool)
    }

    /// Loads one of the word packs compiled into the crate, e.g. `english`.
    pub fn bundled(name: &str) -> Result<Self, PoolError> {
        let file = PACK_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| PoolError::UnknownPack(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| PoolError::UnknownPack(name.to_string()))?;
        Self::from_json(contents)
    }

    /// Names of the bundled packs, sorted
    pub fn bundled_names() -> Vec<String> {
        let mut names: Vec<String> = PACK_DIR
            .files()
            .filter_map(|f| f.path().file_stem())
            .filter_map(|s| s.to_str())
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.word_lists.is_empty()
    }

    fn normalize(&mut self) {
        for list in &mut self.word_lists {
            for entry in &mut list.words {
                entry.word = normalize_guess(&entry.word);
            }
        }
    }

    fn validate(&self) -> Result<(), PoolError> {
        for (position, list) in self.word_lists.iter().enumerate() {
            let label = list.label(position);
            if list.words.is_empty() {
                return Err(PoolError::EmptyList { list: label });
            }
            for (idx, entry) in list.words.iter().enumerate() {
                if entry.word.is_empty() {
                    return Err(PoolError::EmptyWord {
                        list: label,
                        position: idx + 1,
                    });
                }
                if entry.hints.is_empty() {
                    return Err(PoolError::NoHints {
                        list: label,
                        word: entry.word.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Canonical form used for both stored answers and player guesses
pub fn normalize_guess(text: &str) -> String {
    text.trim().to_lowercase()
}
