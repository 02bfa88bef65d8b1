use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BrowserConfig {
    /// Recipe API settings
    #[serde(default)]
    pub source: SourceConfig,
}

/// Settings for the HTTP recipe source
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// Base URL of the recipes endpoint; list, detail and search paths hang off it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of recipes requested by the initial list call
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_limit: default_list_limit(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://dummyjson.com/recipes".to_string()
}

fn default_list_limit() -> u32 {
    50
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("recipe-hub/{}", env!("CARGO_PKG_VERSION"))
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPEHUB__ prefix
    /// 2. recipehub.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPEHUB__SOURCE__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration, see [`BrowserConfig::load`]
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipehub").required(false))
        // Use double underscore for nested keys: RECIPEHUB__SOURCE__TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPEHUB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
