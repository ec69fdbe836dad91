use crate::chain::directives::SelectorChain;
use crate::chain::parser::ChainParser;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File name looked up in the user config directory.
pub const CHAIN_FILE_NAME: &str = "selectors.txt";

/// Resolves which selector chain file applies and merges it over the
/// built-in chain.
///
/// Precedence: explicit path, then `<config_dir>/itch-slides/selectors.txt`,
/// then the built-in chain alone.
#[derive(Debug, Clone)]
pub struct ChainLoader {
    explicit: Option<PathBuf>,
    user_dir: Option<PathBuf>,
}

impl ChainLoader {
    /// Create a loader that only knows the built-in chain
    pub fn new() -> Self {
        Self { explicit: None, user_dir: None }
    }

    /// Use this file instead of searching the user config directory.
    ///
    /// A missing explicit file is an error.
    pub fn explicit<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.explicit = Some(path.as_ref().to_path_buf());
        self
    }

    /// Directory searched for [`CHAIN_FILE_NAME`].
    pub fn user_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.user_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// The file that [`ChainLoader::load`] would read, if any.
    pub fn source_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit {
            return Some(path.clone());
        }

        self.user_dir
            .as_ref()
            .map(|dir| dir.join(CHAIN_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Load the effective chain
    pub fn load(&self) -> Result<SelectorChain> {
        match self.source_path() {
            Some(path) => {
                let custom = ChainParser::parse_file(&path)?;
                Ok(SelectorChain::builtin().overlay(&custom))
            }
            None => Ok(SelectorChain::builtin()),
        }
    }

    /// Default user config directory (`~/.config/itch-slides` on Linux)
    pub fn default_user_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("itch-slides"))
    }
}

impl Default for ChainLoader {
    fn default() -> Self {
        let loader = Self::new();
        match Self::default_user_dir() {
            Some(dir) => loader.user_dir(dir),
            None => loader,
        }
    }
}
