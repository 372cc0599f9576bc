//! The main REPL implementation.

use std::io::{self, Write};

use pronouns_foundation::{Declension, Error, Number, Result};
use pronouns_template::{Format, alias};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

const PROMPT: &str = "pronouns> ";

const HELP: &str = "\
<path>                     Select a pronoun set, e.g. `they` or `xe/xem/xir/singular`
:show                      List each value of the current set with a usage hint
:set <declension> <value>  Replace one value (subject, object, pd, pp, reflexive, ...)
:number <singular|plural>  Set the grammatical number
:format <plain|markdown|html>
                           Set the example output format
:share                     Print the share link
:presets                   List the catalog with shortest paths
:paths                     List every share path
:example [n]               Render example n (default 0)
:help                      Show this help
:quit                      Exit";

/// A parsed REPL line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Path(&'a str),
    Show,
    Set(Declension, &'a str),
    Number(Number),
    Format(Format),
    Share,
    Presets,
    Paths,
    Example(usize),
    Help,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Result<Self> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Self::Path(line));
        };
        let (name, argument) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(name, argument)| (name, argument.trim()));

        match name {
            "set" => {
                let (which, value) = argument
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| usage(":set <declension> <value>"))?;
                let declension = alias::lookup(which).ok_or_else(|| {
                    Error::invalid_input(format!("unknown declension '{which}'"))
                })?;
                Ok(Self::Set(declension, value.trim()))
            }
            "show" => Ok(Self::Show),
            "number" => Ok(Self::Number(argument.parse()?)),
            "format" => Ok(Self::Format(argument.parse()?)),
            "share" => Ok(Self::Share),
            "presets" => Ok(Self::Presets),
            "paths" => Ok(Self::Paths),
            "example" if argument.is_empty() => Ok(Self::Example(0)),
            "example" => argument
                .parse()
                .map(Self::Example)
                .map_err(|_| usage(":example [n]")),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(Error::invalid_input(format!(
                "unknown command ':{other}' (try :help)"
            ))),
        }
    }
}

fn usage(text: &str) -> Error {
    Error::invalid_input(format!("usage: {text}"))
}

fn show_row(label: &str, value: &str, hint: &str) -> String {
    format!("{label:<22}{value:<14}(e.g. \"{hint}\")")
}

/// What a line evaluated to.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Text(String),
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (current set, catalog, examples).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_paths(
            session
                .presets()
                .into_iter()
                .map(|preset| preset.shortened)
                .collect(),
        );
        Self {
            editor,
            show_banner: session.config().show_banner,
            session,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(PROMPT)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Reply::Text(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
                Ok(true)
            }
            Ok(Reply::Quit) => Ok(false),
            Err(e) => {
                self.print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one line.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, bad arguments, or paths that do
    /// not resolve. The session is unchanged on error.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let reply = match Command::parse(input)? {
            Command::Path(path) => {
                self.session.set_path(path)?;
                self.summary()?
            }
            Command::Show => self.show(),
            Command::Set(declension, value) => {
                self.session.set_value(declension, value)?;
                self.summary()?
            }
            Command::Number(number) => {
                self.session.set_number(number);
                self.summary()?
            }
            Command::Format(format) => {
                self.session.config_mut().format = format;
                format!("format: {format}")
            }
            Command::Share => self.share_line(),
            Command::Presets => self
                .session
                .presets()
                .iter()
                .map(|preset| {
                    format!(
                        "{:<16}{}{}",
                        preset.shortened, preset.shortened, preset.remainder
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Command::Paths => self
                .session
                .share_paths()
                .iter()
                .map(|segments| format!("/{}", segments.join("/")))
                .collect::<Vec<_>>()
                .join("\n"),
            Command::Example(index) => self.session.render_example(index)?,
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(reply))
    }

    /// Describes the current set: title, link, and first example.
    fn summary(&self) -> Result<String> {
        let mut out = format!(
            "{} ({})\n{}",
            self.session.title(),
            self.session.record().number(),
            self.share_line()
        );
        if !self.session.library().is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.session.render_example(0)?);
        }
        Ok(out)
    }

    /// Lists each declension with its value and a usage hint, then the number.
    fn show(&self) -> String {
        let record = self.session.record();
        let mut rows: Vec<String> = Declension::ALL
            .into_iter()
            .map(|d| show_row(d.display_name(), record.get(d), d.usage_hint()))
            .collect();
        let number = record.number();
        rows.push(show_row(
            "Conjugate verbs as",
            number.as_str(),
            number.usage_hint(),
        ));
        rows.join("\n")
    }

    fn share_line(&self) -> String {
        self.session.share_url().map_or_else(
            || "share: (not shareable: a value is empty or contains '/')".to_string(),
            |url| format!("share: {url}"),
        )
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mpronouns\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type a pronoun path (e.g. `they` or `ze/hir`), or :help. Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
