//! Block parser: routes lines to the list builder or to paragraphs.

use crate::{Options, Range};

use super::builder::ListBuilder;
use super::line::LineScanner;
use super::list::List;
use super::marker::{LineClass, Terminator, classify};

/// A top-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A finalized list tree.
    List(List),
    /// Non-list lines, each trimmed; rendered joined by spaces.
    Paragraph(Vec<Range>),
}

/// Block parser state.
pub struct BlockParser<'a> {
    /// Input bytes.
    input: &'a [u8],
    /// Parsing options.
    options: Options,
    /// Open lists.
    builder: ListBuilder,
    /// Accumulated paragraph lines; empty when no paragraph is open.
    paragraph_lines: Vec<Range>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser with default options.
    pub fn new(input: &'a [u8]) -> Self {
        Self::new_with_options(input, Options::default())
    }

    /// Create a new block parser with options.
    pub fn new_with_options(input: &'a [u8], options: Options) -> Self {
        Self {
            input,
            options,
            builder: ListBuilder::new(),
            paragraph_lines: Vec::new(),
        }
    }

    /// Parse all lines and collect blocks in document order.
    pub fn parse(&mut self, blocks: &mut Vec<Block>) {
        let tab_width = self.options.tab_width;
        for line in LineScanner::new(self.input, tab_width) {
            let class = classify(&line, self.input, tab_width, self.builder.is_open());
            match class {
                LineClass::OrderedStart(marker) | LineClass::UnorderedStart(marker) => {
                    self.close_paragraph(blocks);
                    self.builder.start_item(marker);
                }
                LineClass::Continuation { text, malformed } => {
                    if malformed {
                        crate::trace!(offset = text.start, "malformed marker merged into item");
                    }
                    self.builder.continue_item(text);
                }
                LineClass::Terminator(Terminator::Blank) => {
                    self.close_paragraph(blocks);
                    self.close_lists(blocks);
                }
                LineClass::Terminator(Terminator::Foreign) => {
                    // Only classified as foreign while no list is open
                    debug_assert!(!self.builder.is_open());
                    self.paragraph_lines.push(line.content);
                }
            }
        }

        // Close anything still open at end of input
        self.close_paragraph(blocks);
        self.close_lists(blocks);
    }

    /// Close all open lists, emitting them as blocks.
    fn close_lists(&mut self, blocks: &mut Vec<Block>) {
        self.builder.terminate();
        blocks.extend(self.builder.take_lists().into_iter().map(Block::List));
    }

    /// Close an open paragraph.
    fn close_paragraph(&mut self, blocks: &mut Vec<Block>) {
        if self.paragraph_lines.is_empty() {
            return;
        }
        blocks.push(Block::Paragraph(std::mem::take(&mut self.paragraph_lines)));
    }
}

/// Parse only the lists in `input`, skipping everything else.
pub fn parse_lists(input: &[u8], options: &Options) -> Vec<List> {
    let mut blocks = Vec::new();
    BlockParser::new_with_options(input, *options).parse(&mut blocks);
    blocks
        .into_iter()
        .filter_map(|block| match block {
            Block::List(list) => Some(list),
            Block::Paragraph(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Block> {
        let mut parser = BlockParser::new(input.as_bytes());
        let mut blocks = Vec::new();
        parser.parse(&mut blocks);
        blocks
    }

    fn paragraph_text<'a>(input: &'a str, block: &Block) -> Vec<&'a str> {
        match block {
            Block::Paragraph(lines) => lines
                .iter()
                .map(|r| r.try_slice_str(input.as_bytes()).unwrap())
                .collect(),
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    fn list(block: &Block) -> &List {
        match block {
            Block::List(list) => list,
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_blank_lines() {
        assert!(parse("\n\n  \n").is_empty());
    }

    #[test]
    fn test_simple_list() {
        let blocks = parse("1. One\n2. Two");
        assert_eq!(blocks.len(), 1);
        assert_eq!(list(&blocks[0]).items.len(), 2);
    }

    #[test]
    fn test_ten_digits_is_paragraph() {
        let input = "1234567890. Not a list";
        let blocks = parse(input);
        assert_eq!(blocks.len(), 1);
        assert_eq!(paragraph_text(input, &blocks[0]), vec!["1234567890. Not a list"]);
    }

    #[test]
    fn test_multiline_paragraph() {
        let input = "Hello\n  world";
        let blocks = parse(input);
        assert_eq!(paragraph_text(input, &blocks[0]), vec!["Hello", "world"]);
    }

    #[test]
    fn test_list_interrupts_paragraph() {
        let input = "Intro\n- a\n- b";
        let blocks = parse(input);
        assert_eq!(blocks.len(), 2);
        assert_eq!(paragraph_text(input, &blocks[0]), vec!["Intro"]);
        assert_eq!(list(&blocks[1]).items.len(), 2);
    }

    #[test]
    fn test_text_after_list_is_continuation() {
        let input = "- a\nstill a";
        let blocks = parse(input);
        assert_eq!(blocks.len(), 1);
        let item = &list(&blocks[0]).items[0];
        assert_eq!(item.text(input.as_bytes()).as_deref(), Some("a still a"));
    }

    #[test]
    fn test_blank_line_ends_list() {
        let input = "- a\n\nafter";
        let blocks = parse(input);
        assert_eq!(blocks.len(), 2);
        assert_eq!(paragraph_text(input, &blocks[1]), vec!["after"]);
    }

    #[test]
    fn test_blank_line_separates_lists() {
        let blocks = parse("- a\n\n- b");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| matches!(b, Block::List(_))));
    }

    #[test]
    fn test_parse_lists_skips_paragraphs() {
        let lists = parse_lists(b"Intro\n\n- a\n\nOutro", &Options::default());
        assert_eq!(lists.len(), 1);
    }

    #[test]
    fn test_tab_width_option() {
        let options = Options {
            tab_width: 2,
            ..Options::default()
        };
        let lists = parse_lists(b"- a\n\t- b\n  - c", &options);
        // Tab and two spaces land on the same column
        assert_eq!(lists[0].items[0].children.len(), 1);
        assert_eq!(lists[0].items[0].children[0].items.len(), 2);
    }
}
