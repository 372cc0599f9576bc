//! Rendering examples for a pronoun record.

use std::fmt;
use std::str::FromStr;

use pronouns_foundation::{Error, PronounRecord};

use crate::node::{Example, Node};

/// Output format for rendered examples.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Plain text.
    #[default]
    Plain,
    /// Markdown, pronouns in `**bold**`.
    Markdown,
    /// HTML, pronouns in `<strong>` with escaped values.
    Html,
}

impl Format {
    /// Returns the format's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }

    /// Appends a substituted pronoun with this format's emphasis.
    fn emphasize(self, value: &str, out: &mut String) {
        match self {
            Self::Plain => out.push_str(value),
            Self::Markdown => {
                out.push_str("**");
                out.push_str(value);
                out.push_str("**");
            }
            Self::Html => {
                out.push_str("<strong>");
                escape_html(value, out);
                out.push_str("</strong>");
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(Error::invalid_input(format!(
                "unknown format '{other}' (expected plain, markdown or html)"
            ))),
        }
    }
}

fn escape_html(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

/// Renders an example for a record.
///
/// Text nodes carry their own whitespace, so nodes are concatenated directly.
#[must_use]
pub fn render(example: &Example, record: &PronounRecord, format: Format) -> String {
    let mut out = String::new();
    for instance in example.nodes() {
        match instance.node() {
            Node::Text { text } => out.push_str(text),
            Node::Pronoun { declension, casing } => {
                let value = casing.apply(record.get(*declension).trim());
                format.emphasize(&value, &mut out);
            }
            Node::Number { singular, plural } => {
                out.push_str(record.number().select(singular, plural));
            }
        }
    }
    out
}
