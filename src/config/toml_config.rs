use crate::adapters::http::MAX_BODY_BYTES;
use crate::adapters::openrouter::{
    OpenRouterSettings, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_REFERER,
};
use crate::utils::error::{Result, RoastError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const PROVIDER_ENABLED_ENV: &str = "ROAST_PROVIDER_ENABLED";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoastConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// 超過此大小的請求本文直接回通用吐槽
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub referer: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            max_tokens: 50,
            temperature: 0.9,
            timeout_seconds: 4,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl RoastConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RoastError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RoastError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 有檔案就讀檔，否則用預設值；之後再套用環境變數。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// 替換環境變數 (例如 ${OPENROUTER_API_KEY})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    fn apply_env_overrides(&mut self) {
        if self.resolved_api_key().is_none() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                self.provider.api_key = Some(key);
            }
        }

        if let Ok(flag) = std::env::var(PROVIDER_ENABLED_ENV) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.provider.enabled = true,
                "0" | "false" | "no" | "off" => self.provider.enabled = false,
                other => tracing::warn!("Ignoring {}={}: not a boolean", PROVIDER_ENABLED_ENV, other),
            }
        }
    }

    /// 空白或未替換的 `${...}` 視為沒有憑證
    pub fn resolved_api_key(&self) -> Option<String> {
        self.provider
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !env_var_pattern().is_match(key))
            .map(str::to_string)
    }

    pub fn provider_settings(&self) -> OpenRouterSettings {
        OpenRouterSettings {
            enabled: self.provider.enabled,
            api_key: self.resolved_api_key(),
            endpoint: self.provider.endpoint.clone(),
            model: self.provider.model.clone(),
            referer: self.provider.referer.clone(),
            max_tokens: self.provider.max_tokens,
            temperature: self.provider.temperature,
            timeout: Duration::from_secs(self.provider.timeout_seconds),
        }
    }
}

impl Validate for RoastConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.bind", &self.server.bind)?;
        validation::validate_positive_number(
            "server.max_body_bytes",
            self.server.max_body_bytes as u64,
            1,
        )?;
        validation::validate_url("provider.endpoint", &self.provider.endpoint)?;
        validation::validate_non_empty_string("provider.model", &self.provider.model)?;
        validation::validate_positive_number(
            "provider.max_tokens",
            u64::from(self.provider.max_tokens),
            1,
        )?;
        validation::validate_range("provider.temperature", self.provider.temperature, 0.0, 2.0)?;
        validation::validate_range("provider.timeout_seconds", self.provider.timeout_seconds, 1, 30)?;
        Ok(())
    }
}
