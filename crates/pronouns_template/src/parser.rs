//! Parser for the example mini-language.
//!
//! Grammar, matched left to right:
//!
//! ```text
//! example := (text | pronoun | number)*
//! pronoun := '{' [A-Za-z0-9_-]+ '}'
//! number  := '[' word ('/' | '|') word ']'     word := [A-Za-z0-9_'-]+
//! text    := any run of characters not starting a tag
//! ```
//!
//! A stray `}` or `]` is plain text.

use pronouns_foundation::{Error, ErrorContext, Result};
use tracing::trace;

use crate::alias;
use crate::node::{Casing, Example, Node};

/// Parses example source into an [`Example`].
///
/// # Errors
///
/// - `UnknownTag` if a pronoun tag name is not a known alias
/// - `MalformedTag` if a `{` or `[` is not properly closed
pub fn parse(source: &str) -> Result<Example> {
    let example = Parser::new(source).parse()?;
    trace!(nodes = example.len(), "parsed example");
    Ok(example)
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_word_char(c: char) -> bool {
    is_tag_char(c) || c == '\''
}

fn is_tag_open(c: char) -> bool {
    c == '{' || c == '['
}

/// Single-pass parser over the source text.
struct Parser<'src> {
    /// Source text being parsed.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Text accumulated since the last tag.
    text: String,
    /// Nodes produced so far.
    nodes: Vec<Node>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            text: String::new(),
            nodes: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Example> {
        while let Some(c) = self.peek_char() {
            match c {
                '{' => {
                    self.flush_text();
                    let node = self.scan_pronoun()?;
                    self.nodes.push(node);
                }
                '[' => {
                    self.flush_text();
                    let node = self.scan_number()?;
                    self.nodes.push(node);
                }
                c => {
                    self.text.push(c);
                    self.advance();
                }
            }
        }
        self.flush_text();
        Ok(Example::new(self.nodes))
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.position += c.len_utf8();
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    fn scan_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let source = self.source;
        let start = self.position;
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
        &source[start..self.position]
    }

    /// Consumes `expected` or fails with a tag error pointing at `start`.
    fn expect(&mut self, expected: &[char], open: char, start: usize) -> Result<()> {
        match self.peek_char() {
            Some(c) if expected.contains(&c) => {
                self.advance();
                Ok(())
            }
            None => Err(Error::malformed_tag(start, format!("unterminated '{open}'"))),
            Some(c) if is_tag_open(c) => Err(Error::malformed_tag(
                start,
                format!("'{open}' not closed before '{c}'"),
            )),
            Some(c) => Err(Error::malformed_tag(
                start,
                format!("unexpected '{c}' inside '{open}' tag"),
            )),
        }
    }

    /// Scans `{name}`.
    fn scan_pronoun(&mut self) -> Result<Node> {
        let start = self.position;
        self.advance(); // consume '{'
        let name = self.scan_while(is_tag_char);
        self.expect(&['}'], '{', start)?;

        if name.is_empty() {
            return Err(Error::malformed_tag(start, "empty pronoun tag"));
        }
        let declension = alias::lookup(name).ok_or_else(|| {
            Error::unknown_tag(name).with_context(ErrorContext::new().with_offset(start))
        })?;

        Ok(Node::Pronoun {
            declension,
            casing: Casing::of(name),
        })
    }

    /// Scans `[singular/plural]`.
    fn scan_number(&mut self) -> Result<Node> {
        let start = self.position;
        self.advance(); // consume '['
        let singular = self.scan_while(is_word_char);
        self.expect(&['/', '|'], '[', start)?;
        let plural = self.scan_while(is_word_char);
        self.expect(&[']'], '[', start)?;

        if singular.is_empty() || plural.is_empty() {
            return Err(Error::malformed_tag(
                start,
                "number tag needs a singular and a plural word",
            ));
        }

        Ok(Node::Number {
            singular: singular.to_string(),
            plural: plural.to_string(),
        })
    }

    /// Moves accumulated text into a text node.
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.nodes.push(Node::Text { text });
        }
    }
}
