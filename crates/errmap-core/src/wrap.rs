//! Line wrapping used by report rendering.
//!
//! The collection only decides indents and prefixes. Turning a message into
//! lines that fit the output width is the job of a [`LineWrapper`].

use textwrap::{Options, WordSeparator, WrapAlgorithm};

/// Default maximum line width, in columns
pub const DEFAULT_WIDTH: usize = 80;

/// Smallest width a report can usefully be wrapped to
pub const MIN_WIDTH: usize = 20;

/// Produces wrapped, indented text blocks.
///
/// Every returned block ends with a newline so it can be written to a sink
/// in one call.
pub trait LineWrapper {
    /// Wrap `text` with every line indented by `indent` columns.
    fn wrap(&self, text: &str, indent: usize) -> String;

    /// Wrap `text` so the first line starts with `prefix` (after `indent`
    /// columns) and continuation lines align under the text, not the prefix.
    fn wrap_prefixed(&self, prefix: &str, text: &str, indent: usize) -> String;
}

/// [`LineWrapper`] backed by `textwrap`, breaking at spaces only.
///
/// Words longer than the width are left whole rather than split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWrapper {
    width: usize,
}

impl TextWrapper {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn fill(&self, first: &str, rest: &str, text: &str) -> String {
        if text.is_empty() {
            let mut line = first.trim_end().to_string();
            line.push('\n');
            return line;
        }

        let options = Options::new(self.width)
            .initial_indent(first)
            .subsequent_indent(rest)
            .break_words(false)
            .word_separator(WordSeparator::AsciiSpace)
            .wrap_algorithm(WrapAlgorithm::FirstFit);

        let mut block = textwrap::fill(text, options);
        block.push('\n');
        block
    }
}

impl Default for TextWrapper {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl LineWrapper for TextWrapper {
    fn wrap(&self, text: &str, indent: usize) -> String {
        let pad = " ".repeat(indent);
        self.fill(&pad, &pad, text)
    }

    fn wrap_prefixed(&self, prefix: &str, text: &str, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let first = format!("{pad}{prefix}");
        let rest = " ".repeat(indent + prefix.chars().count());
        self.fill(&first, &rest, text)
    }
}
