//! Configuration for a session and the front end around it.

use pronouns_template::Format;

/// Default site that share paths are appended to.
pub const DEFAULT_BASE_URL: &str = "https://pronouns.me";

/// Default log filter when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration.
///
/// Controls link generation, output format, and front-end chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Base URL for share links, without a trailing slash.
    pub base_url: String,

    /// Output format for rendered examples.
    pub format: Format,

    /// Use the shortest unique path in links (false = full five values).
    pub shorten_links: bool,

    /// Print the welcome banner when the REPL starts.
    pub show_banner: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: Format::Plain,
            shorten_links: true,
            show_banner: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration for non-interactive use.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            show_banner: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that traces everything this workspace logs.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            log_filter: "pronouns=trace".to_string(),
            ..Self::default()
        }
    }

    /// Builder method to set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Builder method to enable/disable shortened links.
    #[must_use]
    pub fn with_shorten_links(mut self, shorten: bool) -> Self {
        self.shorten_links = shorten;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
