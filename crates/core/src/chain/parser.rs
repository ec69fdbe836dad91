use crate::chain::directives::{SelectorChain, parse_directive};
use crate::error::{Result, SlidesError};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Selector chain file parser
#[derive(Debug)]
pub struct ChainParser;

impl ChainParser {
    /// Parse a chain file from disk
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SelectorChain> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SlidesError::FileNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)
            .map_err(|e| SlidesError::Config(format!("Cannot open file {}: {}", path.display(), e)))?;

        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a chain from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<SelectorChain> {
        let mut chain = SelectorChain::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line =
                line.map_err(|e| SlidesError::Config(format!("Read error at line {}: {}", line_number, e)))?;
            Self::apply_line(&mut chain, &line, line_number)?;
        }

        Ok(chain)
    }

    /// Parse a chain from a string
    pub fn parse_string(content: &str) -> Result<SelectorChain> {
        let mut chain = SelectorChain::new();

        for (index, line) in content.lines().enumerate() {
            Self::apply_line(&mut chain, line, index + 1)?;
        }

        Ok(chain)
    }

    fn apply_line(chain: &mut SelectorChain, line: &str, line_number: usize) -> Result<()> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let directive = parse_directive(line)
            .map_err(|e| SlidesError::Config(format!("Parse error at line {}: {}", line_number, e)))?;
        chain.add_directive(directive);
        Ok(())
    }
}
