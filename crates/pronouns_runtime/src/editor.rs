//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable.

use pronouns_foundation::{Declension, Error, ErrorKind, Number, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Highlighter, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the pronoun paths offered for completion.
    fn set_paths(&mut self, paths: Vec<String>);
}

/// Helper for rustyline that provides completion and history hints.
#[derive(Helper, Completer, Hinter, Highlighter, Validator)]
struct PronounsHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

/// Completes REPL commands, their arguments, and known pronoun paths.
struct CommandCompleter {
    paths: Vec<String>,
}

impl CommandCompleter {
    /// Command names, with a trailing space when they take an argument.
    const COMMANDS: [&'static str; 10] = [
        ":show", ":set ", ":number ", ":format ", ":share", ":presets", ":paths", ":example",
        ":help", ":quit",
    ];

    fn candidates(&self, line: &str, start: usize) -> Vec<String> {
        let head = line[..start].trim_end();
        match head {
            "" => Self::COMMANDS
                .iter()
                .map(|c| (*c).to_string())
                .chain(self.paths.iter().cloned())
                .collect(),
            ":set" => Declension::ALL.iter().map(|d| format!("{} ", d.name())).collect(),
            ":number" => [Number::Singular, Number::Plural]
                .iter()
                .map(|n| n.as_str().to_string())
                .collect(),
            ":format" => ["plain", "markdown", "html"]
                .iter()
                .map(|f| (*f).to_string())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Find the start of the current word
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let candidates = self
            .candidates(line, start)
            .into_iter()
            .filter(|candidate| candidate.starts_with(word))
            .map(|candidate| Pair {
                display: candidate.trim_end().to_string(),
                replacement: candidate,
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<PronounsHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = PronounsHelper {
            completer: CommandCompleter { paths: Vec::new() },
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_paths(&mut self, paths: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.paths = paths;
        }
    }
}
