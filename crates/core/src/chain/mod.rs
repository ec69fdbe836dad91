//! Selector fallback chain configuration.
//!
//! The chain is data, not code: it can be loaded from a line-oriented
//! directive file so that layout changes on the target site only need a
//! config edit.
//!
//! ```text
//! # selectors.txt
//! selector: .game_cell
//! selector: .project_cell
//! link_pattern: /games/
//! title: .title
//! description: .game_text
//! image_attr: data-lazy_src
//! ```

pub mod compiled;
pub mod directives;
pub mod loader;
pub mod parser;

pub use compiled::CompiledChain;
pub use directives::{Directive, SelectorChain};
pub use loader::ChainLoader;
pub use parser::ChainParser;
