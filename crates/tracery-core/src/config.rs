/// Configuration for Tracery applications.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Whether log lines include the module target.
    pub log_targets: bool,
    /// How much the subscriber prints beyond the filter.
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: String::from("info"),
            log_targets: false,
            verbosity: Verbosity::Normal,
        }
    }
}

impl Config {
    /// Configuration that traces every geometry call.
    pub fn debug() -> Self {
        Config {
            log_filter: String::from("info,tracery_geometry=trace"),
            log_targets: true,
            verbosity: Verbosity::Verbose,
        }
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only warnings and errors
    Quiet,
    /// The configured filter, unchanged
    #[default]
    Normal,
    /// Adds span close events so timings of chained edits show up
    Verbose,
}
