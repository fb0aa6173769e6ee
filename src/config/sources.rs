//! External value sources
//!
//! The resolver only sees an [`ExternalValues`] implementation. This module
//! provides the process environment, layered lookups, and the `.env` file
//! loader used by the binary at boot.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::path::{Path, PathBuf};

use super::keys::ENVIRONMENT;
use super::profile::Profile;
use super::settings::Settings;

/// Indicator used when `ENVIRONMENT` is not set anywhere
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// A read-only key/value source for externally supplied settings
pub trait ExternalValues {
    fn get(&self, key: &str) -> Option<String>;
}

impl ExternalValues for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ExternalValues for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: ExternalValues + ?Sized> ExternalValues for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ExternalValues for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Ordered stack of sources; the first layer holding a key wins.
#[derive(Default)]
pub struct Layered<'a> {
    layers: Vec<&'a dyn ExternalValues>,
}

impl<'a> Layered<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer with lower precedence than every layer added so far
    pub fn layer(mut self, source: &'a dyn ExternalValues) -> Self {
        self.layers.push(source);
        self
    }
}

impl ExternalValues for Layered<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}

/// Boot-time settings loader
///
/// Precedence, highest first: explicit overrides (CLI flags), the process
/// environment, `.env.<profile>`, `.env`. Env files are read without touching
/// the process environment.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    dir: PathBuf,
    overrides: HashMap<String, String>,
}

impl EnvLoader {
    /// Loader reading env files from the current working directory
    pub fn new() -> Self {
        Self::in_dir(".")
    }

    /// Loader reading env files from `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Set a value that shadows every other source
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Resolve settings from the real process environment
    pub fn load(&self) -> Result<Settings> {
        self.load_with(&ProcessEnv)
    }

    /// Resolve settings using `process` in place of the process environment
    pub fn load_with(&self, process: &dyn ExternalValues) -> Result<Settings> {
        let base_file = read_env_file(&self.dir.join(".env"))?;

        let indicator = Layered::new()
            .layer(&self.overrides)
            .layer(process)
            .layer(&base_file)
            .get(ENVIRONMENT)
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let profile = Profile::from_indicator(&indicator)?;
        let profile_file = read_env_file(&self.dir.join(format!(".env.{}", profile)))?;

        let values = Layered::new()
            .layer(&self.overrides)
            .layer(process)
            .layer(&profile_file)
            .layer(&base_file);

        Ok(Settings::resolve(&indicator, &values)?)
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a dotenv file into a map; a missing file is an empty map.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter
            .collect::<std::result::Result<HashMap<_, _>, _>>()
            .with_context(|| format!("Failed to parse env file {}", path.display())),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to open env file {}", path.display())),
    }
}
