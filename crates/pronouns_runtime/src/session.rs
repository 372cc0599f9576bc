//! Session state for the REPL and CLI.
//!
//! The session holds the catalog (through its encoder), the parsed example
//! library, the configuration, and the pronoun set currently being explored.

use pronouns_catalog::{
    CanonicalOptions, Catalog, Encoder, Preset, Resolver, is_safe_for_external_identifier,
};
use pronouns_foundation::{
    Declension, Error, ErrorKind, Number, PronounRecord, RecordDefect, Result,
};
use pronouns_template::{ExampleLibrary, Format};
use tracing::debug;

use crate::config::RuntimeConfig;

/// Prefix of every page title.
pub const TITLE_PREFIX: &str = "Pronoun example: ";

/// Session state for exploring pronoun sets.
#[derive(Debug)]
pub struct Session {
    /// Encoder over the session's catalog.
    encoder: Encoder,

    /// Parsed authored examples.
    library: ExampleLibrary,

    /// Link and output settings.
    config: RuntimeConfig,

    /// The pronoun set being explored.
    record: PronounRecord,
}

impl Session {
    /// Creates a session over the reference catalog and built-in examples.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in examples fail to parse.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        Self::with_parts(Catalog::reference(), ExampleLibrary::builtin()?, config)
    }

    /// Creates a session from an explicit catalog and example library.
    ///
    /// The current set starts as the first catalog entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty.
    pub fn with_parts(
        catalog: Catalog,
        library: ExampleLibrary,
        config: RuntimeConfig,
    ) -> Result<Self> {
        let record = catalog
            .first()
            .map(|entry| entry.record().clone())
            .ok_or_else(|| Error::new(ErrorKind::Internal("catalog is empty".to_string())))?;
        Ok(Self {
            encoder: Encoder::new(catalog),
            library,
            config,
            record,
        })
    }

    /// Returns the current pronoun set.
    #[must_use]
    pub fn record(&self) -> &PronounRecord {
        &self.record
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.encoder.catalog()
    }

    /// Returns the encoder.
    #[must_use]
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// Returns the example library.
    #[must_use]
    pub fn library(&self) -> &ExampleLibrary {
        &self.library
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    /// Resolves a (possibly abbreviated) path and makes it the current set.
    ///
    /// On error the current set is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error for malformed, unknown, or ambiguous paths.
    pub fn set_path(&mut self, input: &str) -> Result<&PronounRecord> {
        let record = Resolver::new(self.encoder.catalog()).resolve(input, true)?;
        debug!(input, record = %record, "current set changed");
        self.record = record;
        Ok(&self.record)
    }

    /// Replaces one value of the current set.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if the value is blank.
    pub fn set_value(&mut self, declension: Declension, value: &str) -> Result<&PronounRecord> {
        if value.trim().is_empty() {
            return Err(Error::malformed_record(RecordDefect::EmptySegment(
                declension,
            )));
        }
        self.record = self.record.with_value(declension, value);
        Ok(&self.record)
    }

    /// Sets the grammatical number of the current set.
    pub fn set_number(&mut self, number: Number) -> &PronounRecord {
        self.record = self.record.with_number(number);
        &self.record
    }

    /// Returns the path for the current set, shortened if configured.
    ///
    /// `None` if the set cannot be published as a path.
    #[must_use]
    pub fn share_path(&self) -> Option<String> {
        if self.config.shorten_links {
            return self.encoder.share_path(&self.record);
        }
        if !is_safe_for_external_identifier(&self.record) {
            return None;
        }
        Some(format!(
            "/{}",
            self.encoder
                .to_canonical_string(&self.record, CanonicalOptions::full())
        ))
    }

    /// Returns the share link for the current set.
    #[must_use]
    pub fn share_url(&self) -> Option<String> {
        self.share_path()
            .map(|path| format!("{}{path}", self.config.base_url.trim_end_matches('/')))
    }

    /// Returns the page title for the current set.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{TITLE_PREFIX}{}",
            self.record.path(Declension::COUNT, false)
        )
    }

    /// Renders an example for the current set in the configured format.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no example at `index`.
    pub fn render_example(&self, index: usize) -> Result<String> {
        let example = self.library.get(index).ok_or_else(|| {
            Error::invalid_input(format!(
                "no example {index} (there are {})",
                self.library.len()
            ))
        })?;
        Ok(example.render(&self.record, self.config.format))
    }

    /// Returns the link preview description: the first example as markdown.
    #[must_use]
    pub fn description(&self) -> String {
        self.library
            .first()
            .map(|example| example.render(&self.record, Format::Markdown))
            .unwrap_or_default()
    }

    /// Lists the catalog presets with their shortened paths.
    #[must_use]
    pub fn presets(&self) -> Vec<Preset> {
        self.encoder.presets()
    }

    /// Lists the share path segments of every catalog entry.
    #[must_use]
    pub fn share_paths(&self) -> Vec<Vec<String>> {
        self.encoder.share_paths()
    }
}
