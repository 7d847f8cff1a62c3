//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// Builder for merging configuration sources
///
/// A file that fails to load leaves the defaults in place; the error is
/// kept so the caller can report it once logging is up.
pub struct ConfigBuilder {
    config: Config,
    loaded_from: Option<PathBuf>,
    load_error: Option<ConfigError>,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            loaded_from: None,
            load_error: None,
        }
    }

    /// Load configuration from a file, or from the first default location
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let path = match path {
            Some(p) => Some(PathBuf::from(p)),
            None => ConfigFile::find_default(),
        };

        if let Some(path) = path {
            match ConfigFile::load(&path) {
                Ok(cfg) => {
                    self.config = cfg;
                    self.loaded_from = Some(path);
                }
                Err(e) => self.load_error = Some(e),
            }
        }

        self
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI monitoring mode
    pub fn with_mode(mut self, mode: Option<String>) -> Self {
        if let Some(m) = mode {
            self.config.monitor.mode = Some(m);
        }
        self
    }

    /// Override with CLI cat name
    pub fn with_cat_name(mut self, name: Option<String>) -> Self {
        if let Some(n) = name {
            self.config.monitor.cat_name = n;
        }
        self
    }

    /// Override with CLI visit file
    pub fn with_visits_path(mut self, path: Option<String>) -> Self {
        if let Some(p) = path {
            self.config.monitor.visits_path = Some(p);
        }
        self
    }

    /// Configuration merged so far
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// File the configuration came from, if any
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }

    /// Error from the last file load, if it failed
    pub fn load_error(&self) -> Option<&ConfigError> {
        self.load_error.as_ref()
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
