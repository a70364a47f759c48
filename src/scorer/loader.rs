use crate::config::DiscConfig;
use crate::consts::CONFIG_PATH_ENV;
use crate::defaults::embedded_config;
use crate::error::DiscForgeError;
use std::env;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Locations tried, relative to the working directory, after any explicit path.
pub const CONVENTIONAL_PATHS: [&str; 3] = [
    "data/disc_config.json",
    "config/disc_config.json",
    "analysis/excel_parity/excel_config.json",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(p) => write!(f, "{}", p.display()),
            ConfigSource::Embedded => write!(f, "embedded default"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: DiscConfig,
    pub source: ConfigSource,
}

/// One step of the resolution chain.
pub trait ConfigResolver: Send + Sync {
    fn describe(&self) -> String;

    /// `None` means "try the next resolver". Failures are logged, never raised.
    fn resolve(&self) -> Option<LoadedConfig>;
}

pub struct FileResolver {
    path: PathBuf,
}

impl FileResolver {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigResolver for FileResolver {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn resolve(&self) -> Option<LoadedConfig> {
        match DiscConfig::load_from_file(&self.path) {
            Ok(config) => Some(LoadedConfig {
                config,
                source: ConfigSource::File(self.path.clone()),
            }),
            Err(DiscForgeError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}", self.path.display());
                None
            }
            Err(e) => {
                warn!(
                    "⚠️  Ignoring config at {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }
}

/// Reads a path from an environment variable and defers to [`FileResolver`].
pub struct EnvResolver {
    var: String,
}

impl EnvResolver {
    pub fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl ConfigResolver for EnvResolver {
    fn describe(&self) -> String {
        format!("env ${}", self.var)
    }

    fn resolve(&self) -> Option<LoadedConfig> {
        let path = env::var_os(&self.var)?;
        if path.is_empty() {
            return None;
        }
        FileResolver::new(PathBuf::from(path)).resolve()
    }
}

/// Ordered resolver chain with the embedded default as the final, infallible step.
#[derive(Default)]
pub struct ConfigLoader {
    resolvers: Vec<Box<dyn ConfigResolver>>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit path (if any), then `$DISC_CONFIG_PATH`, then [`CONVENTIONAL_PATHS`].
    pub fn standard(explicit: Option<PathBuf>) -> Self {
        let mut loader = Self::new();
        if let Some(path) = explicit {
            loader = loader.with_resolver(FileResolver::new(path));
        }
        loader = loader.with_resolver(EnvResolver::new(CONFIG_PATH_ENV));
        for path in CONVENTIONAL_PATHS {
            loader = loader.with_resolver(FileResolver::new(path));
        }
        loader
    }

    pub fn with_resolver<R: ConfigResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn describe(&self) -> Vec<String> {
        let mut steps: Vec<String> = self.resolvers.iter().map(|r| r.describe()).collect();
        steps.push("embedded default".to_string());
        steps
    }

    pub fn load(&self) -> LoadedConfig {
        for resolver in &self.resolvers {
            if let Some(loaded) = resolver.resolve() {
                info!("📄 Using scoring config from {}", loaded.source);
                return loaded;
            }
        }
        info!("📄 Using embedded scoring config");
        LoadedConfig {
            config: embedded_config(),
            source: ConfigSource::Embedded,
        }
    }
}

/// Resolves with [`ConfigLoader::standard`] and no explicit path.
pub fn load_config() -> LoadedConfig {
    ConfigLoader::standard(None).load()
}
