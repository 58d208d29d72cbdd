use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Largest `bitmap.chunk_bytes` accepted from a config file.
pub const MAX_CHUNK_BYTES: usize = 1 << 30;

/// Where the token dictionary comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionarySource {
    /// The periodic table compiled into the crate.
    #[default]
    Builtin,
    /// A CSV file with `Element, Symbol, AtomicNumber, AtomicMass, Period, Group` columns.
    Csv(PathBuf),
}

/// What to do when the same token is supplied more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    LastWins,
    FirstWins,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitmapOptions {
    /// Prefix the bitmap with a self-describing header.
    pub header: bool,
    /// 0 lets rayon pick, 1 runs on the calling thread.
    pub workers: usize,
    /// Output bytes produced by one parallel work unit.
    pub chunk_bytes: usize,
}

impl Default for BitmapOptions {
    fn default() -> Self {
        BitmapOptions {
            header: false,
            workers: 1,
            chunk_bytes: 4096,
        }
    }
}

pub trait Configuration {
    fn get_dictionary_source(&self) -> &DictionarySource;
    fn get_duplicate_policy(&self) -> DuplicatePolicy;
    fn get_bitmap_options(&self) -> &BitmapOptions;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultConfig {
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub dictionary: DictionarySource,
    pub duplicates: DuplicatePolicy,
    pub bitmap: BitmapOptions,
}

impl DefaultConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let cfg: DefaultConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::PathIsDirectory(path.to_path_buf()));
        }
        debug!("loading configuration from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.bitmap.chunk_bytes == 0 {
            return Err(Error::config("bitmap.chunk_bytes must be positive"));
        }
        if self.bitmap.chunk_bytes > MAX_CHUNK_BYTES {
            return Err(Error::config(format!(
                "bitmap.chunk_bytes must be at most {}",
                MAX_CHUNK_BYTES
            )));
        }
        Ok(())
    }
}

impl Configuration for DefaultConfig {
    fn get_dictionary_source(&self) -> &DictionarySource {
        &self.dictionary
    }

    fn get_duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    fn get_bitmap_options(&self) -> &BitmapOptions {
        &self.bitmap
    }
}
