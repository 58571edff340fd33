//! Configuration for the SUMU tooling.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (API_KEY, SUMU_GEMINI_MODEL, SUMU_ADMIN_USER,
//!    SUMU_ADMIN_PASSWORD, SUMU_WHATSAPP_NUMBER)
//! 2. Config file (.sumu/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .sumu/config.yaml
//! - Falls back to ~/.sumu/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::gemini::DEFAULT_MODEL;

/// Default WhatsApp business number for contact deep links
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919022854954";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub admin: Option<AdminConfig>,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactConfig {
    pub whatsapp_number: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub gemini: GeminiSettings,
    /// Admin login; `None` disables admin commands
    pub admin: Option<AdminCredentials>,
    pub contact: ContactSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub whatsapp_number: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".sumu").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".sumu").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge a parsed config file with environment overrides
fn resolve<F>(file: Option<(PathBuf, ConfigFile)>, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let (config_file, parsed) = match file {
        Some((path, parsed)) => (Some(path), Some(parsed)),
        None => (None, None),
    };

    let gemini_file = parsed.as_ref().map(|c| c.gemini.clone()).unwrap_or_default();
    let gemini = GeminiSettings {
        api_key: env("API_KEY").or(gemini_file.api_key),
        model: env("SUMU_GEMINI_MODEL")
            .or(gemini_file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
    };

    let admin_file = parsed.as_ref().and_then(|c| c.admin.clone());
    let admin = match (
        env("SUMU_ADMIN_USER").or_else(|| admin_file.as_ref().map(|a| a.username.clone())),
        env("SUMU_ADMIN_PASSWORD").or_else(|| admin_file.as_ref().map(|a| a.password.clone())),
    ) {
        (Some(username), Some(password)) => Some(AdminCredentials { username, password }),
        _ => None,
    };

    let contact = ContactSettings {
        whatsapp_number: env("SUMU_WHATSAPP_NUMBER")
            .or_else(|| parsed.as_ref().and_then(|c| c.contact.whatsapp_number.clone()))
            .unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string()),
    };

    ResolvedConfig {
        gemini,
        admin,
        contact,
        config_file,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = match find_config_file() {
        Some(path) => {
            let parsed = load_config_file(&path)?;
            Some((path, parsed))
        }
        None => None,
    };

    Ok(resolve(file, |key| std::env::var(key).ok()))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
