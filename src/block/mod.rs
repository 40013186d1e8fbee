//! Block-level parser for Markdown lists.
//!
//! The block parser is line-oriented:
//! - [`LineScanner`] splits input and measures indentation
//! - [`classify`] recognizes list markers
//! - [`ListBuilder`] nests items into finalized [`List`] trees
//! - [`BlockParser`] routes everything else into paragraphs

mod builder;
mod line;
mod list;
mod marker;
mod parser;

pub use builder::ListBuilder;
pub use line::{Line, LineScanner};
pub use list::{List, ListItem, ListKind, Marker, MarkerKind};
pub use marker::{LineClass, Terminator, classify};
pub use parser::{Block, BlockParser, parse_lists};
