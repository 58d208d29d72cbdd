use std::path::PathBuf;

use chemspell::config::configuration::{DefaultConfig, DictionarySource};
use chemspell::dict::loader::load_dictionary;
use chemspell::{Element, TokenDictionary};

/// Dictionary and configuration arg group.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// YAML configuration file.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Element CSV to use instead of the configured dictionary.
    #[clap(long)]
    pub dictionary: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_config(&self) -> chemspell::Result<DefaultConfig> {
        let mut cfg = match &self.config {
            Some(path) => DefaultConfig::load(path)?,
            None => DefaultConfig::default(),
        };
        if let Some(csv) = &self.dictionary {
            cfg.dictionary = DictionarySource::Csv(csv.clone());
        }
        Ok(cfg)
    }

    pub fn load_dictionary(&self, cfg: &DefaultConfig) -> chemspell::Result<TokenDictionary<Element>> {
        load_dictionary(cfg)
    }
}
