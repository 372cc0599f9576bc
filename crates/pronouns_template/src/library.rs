//! Authored examples, parsed once.

use pronouns_foundation::{ErrorContext, ErrorKind, Result};
use tracing::debug;

use crate::node::Example;
use crate::parser::parse;

/// Source of the built-in "new friend" example.
pub const NEW_FRIEND: &str = "Hello! Today I met a new friend, and {s} [is/are] really nice. \
{S} [has/have] a wonderful personality. That smile of {pp} really makes me happy. \
I could talk to {o} all day, although {s} [doesn't/don't] talk about {r} much. \
I wonder if {pd} day has been wonderful. I hope so!";

/// A set of parsed examples.
#[derive(Clone, Debug)]
pub struct ExampleLibrary {
    examples: im::Vector<Example>,
}

impl ExampleLibrary {
    /// Creates the library of built-in examples.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in source fails to parse.
    pub fn builtin() -> Result<Self> {
        Self::from_sources([NEW_FRIEND])
    }

    /// Parses each source into an example.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure, with a context naming the example.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut examples = im::Vector::new();
        for (index, source) in sources.into_iter().enumerate() {
            let example = parse(source).map_err(|mut err| {
                let offset = err.context.take().and_then(|c| c.offset).or(match &err.kind {
                    ErrorKind::MalformedTag { offset, .. } => Some(*offset),
                    _ => None,
                });
                let mut context = ErrorContext::new().with_source(format!("example {index}"));
                if let Some(offset) = offset {
                    context = context.with_offset(offset);
                }
                err.with_context(context)
            })?;
            examples.push_back(example);
        }
        debug!(count = examples.len(), "loaded examples");
        Ok(Self { examples })
    }

    /// Returns the example at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    /// Returns the first example.
    #[must_use]
    pub fn first(&self) -> Option<&Example> {
        self.examples.front()
    }

    /// Returns the number of examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if there are no examples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Iterates over the examples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }
}
