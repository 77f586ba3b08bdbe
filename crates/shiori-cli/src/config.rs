use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    /// Pretty print JSON output
    #[serde(default)]
    pub pretty: bool,
    /// Log level used when neither `RUST_LOG` nor `SHIORI_LOG` is set
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: shiori_home().join("config.yml"),
            pretty: false,
            log_level: None,
        }
    }
}

fn shiori_home() -> PathBuf {
    match std::env::var("SHIORI_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shiori"),
    }
}

impl Config {
    /// Opens the config at `path`, writing the defaults there when it does
    /// not exist yet. Without a path the one in `SHIORI_HOME` is read if
    /// present and nothing is written.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Config, anyhow::Error> {
        match path {
            Some(p) => Self::load(PathBuf::new().join(p), true),
            None => Self::load(shiori_home().join("config.yml"), false),
        }
    }

    fn load(config_path: PathBuf, create: bool) -> Result<Config, anyhow::Error> {
        match std::fs::File::open(&config_path) {
            Ok(file) => {
                let mut cfg: Self = serde_yml::from_reader(file)
                    .with_context(|| format!("invalid config {}", config_path.display()))?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                if create {
                    cfg.save()?;
                }
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
