use crate::{schema::IntWidth, Engine, Error, Result};

use serde::Deserialize;
use std::path::Path;

/// Schema generation settings.
///
/// Built in code with the chaining setters, or read from TOML:
///
/// ```toml
/// name = "shop"
/// engines = ["postgresql", "sqlite"]
/// int_width = 64
/// quoted_names = ["user", "order"]
/// help = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Label of the generated artifacts
    pub name: String,

    /// Engines to generate scripts for
    pub engines: Vec<Engine>,

    /// Width of `Int`. Defaults to the pointer width of the build target.
    pub int_width: Option<IntWidth>,

    /// Identifiers quoted wherever they are emitted
    pub quoted_names: Vec<String>,

    /// Declares a `_<table>` help table next to every table
    pub help: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml(src: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(src).map_err(|err| Error::invalid_config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|err| Error::from(err).context(format!("reading {}", path.display())))?;
        Self::from_toml(&src)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn engines(mut self, engines: impl IntoIterator<Item = Engine>) -> Self {
        self.engines = engines.into_iter().collect();
        self
    }

    pub fn int_width(mut self, width: IntWidth) -> Self {
        self.int_width = Some(width);
        self
    }

    pub fn quoted_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quoted_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.engines.is_empty() {
            return Err(Error::invalid_config("`engines` must name at least one engine"));
        }

        for (i, engine) in self.engines.iter().enumerate() {
            if self.engines[..i].contains(engine) {
                return Err(Error::invalid_config(format!(
                    "engine `{engine}` listed twice"
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "model".to_string(),
            engines: Engine::ALL.to_vec(),
            int_width: None,
            quoted_names: vec!["user".to_string()],
            help: false,
        }
    }
}
