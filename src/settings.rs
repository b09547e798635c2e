use crate::error::Result;
use crate::utils::constants::{DEFAULT_CONFIG_FILE, DEFAULT_HOST, DEFAULT_PAGE_SIZE, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use validator::Validate;

/// Runtime settings for talking to the climate service and writing output.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExportConfig {
    #[validate(url)]
    pub host: String,

    #[validate(range(min = 1, max = 1000))]
    pub page_size: usize,

    pub output_dir: PathBuf,

    #[serde(default)]
    #[validate(range(min = 1))]
    pub timeout_secs: Option<u64>,

    #[validate(length(min = 1))]
    pub user_agent: String,
}

/// Values given on the command line; these win over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub page_size: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

impl ExportConfig {
    /// Layer defaults, a TOML file, `STATION_EXPORT_*` variables and CLI overrides.
    ///
    /// Without an explicit `config_file`, `station-export.toml` in the working
    /// directory is read if it exists.
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let settings = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("page_size", DEFAULT_PAGE_SIZE as i64)?
            .set_default("output_dir", ".")?
            .set_default("user_agent", default_user_agent())?
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .set_override_option("host", overrides.host.clone())?
            .set_override_option("page_size", overrides.page_size.map(|n| n as i64))?
            .set_override_option(
                "output_dir",
                overrides
                    .output_dir
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .build()?;

        let config: ExportConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Host with any trailing slash removed, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            output_dir: PathBuf::from("."),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
