//! 翻译配置管理模块
//!
//! 提供统一的配置接口，支持文件配置、环境变量和默认值。
//! 配置在任何翻译调用之前加载一次，之后不再变更。

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::translation::error::{TranslationError, TranslationResult};

/// 配置常量
pub mod constants {
    // 命令行默认值
    pub const DEFAULT_SOURCE_LANG: &str = "en";
    pub const DEFAULT_TARGET_LANG: &str = "et";
    pub const DEFAULT_UNTRANSLATED_PATH: &str = "./untranslated";
    pub const DEFAULT_TRANSLATED_PATH: &str = "./translated";
    pub const DEFAULT_BACKEND: &str = "google";

    // 默认API设置
    pub const DEFAULT_GOOGLE_ENDPOINT: &str =
        "https://translate.googleapis.com/translate_a/single";
    pub const DEFAULT_DEEPLX_API_URL: &str = "http://localhost:1188/translate";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "po-translate.toml",
        ".po-translate.toml",
        "~/.config/po-translate/config.toml",
    ];
}

/// 后端传输与凭据配置
///
/// 每个后端变体拥有自己的配置段；`timeout_secs` 对所有后端生效。
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// 单次请求的传输层超时（秒）
    pub timeout_secs: u64,
    pub google: GoogleConfig,
    pub deeplx: DeepLxConfig,
}

/// Google 网页端点配置（无凭据）
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GoogleConfig {
    pub endpoint: String,
}

/// DeepLX 服务配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeepLxConfig {
    pub api_url: String,
    /// 可选的 Bearer 访问令牌
    pub api_token: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            google: GoogleConfig::default(),
            deeplx: DeepLxConfig::default(),
        }
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_GOOGLE_ENDPOINT.to_string(),
        }
    }
}

impl Default for DeepLxConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_DEEPLX_API_URL.to_string(),
            api_token: None,
        }
    }
}

impl BackendConfig {
    /// 加载配置：搜索配置文件，应用环境变量覆盖，最后验证
    pub fn load() -> TranslationResult<Self> {
        let mut config = Self::load_config_file()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 按固定搜索路径查找配置文件
    fn load_config_file() -> TranslationResult<Self> {
        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Self::load_from_file(expanded_path.as_ref());
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file(path: &str) -> TranslationResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::ConfigError(format!("读取配置文件失败: {}", e)))?;
        Ok(toml::from_str(&content)?)
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("PO_TRANSLATE_GOOGLE_ENDPOINT") {
            self.google.endpoint = endpoint;
        }

        if let Ok(api_url) = std::env::var("PO_TRANSLATE_DEEPLX_API_URL") {
            tracing::info!("环境变量覆盖 DeepLX API URL: {}", api_url);
            self.deeplx.api_url = api_url;
        }

        if let Ok(token) = std::env::var("PO_TRANSLATE_DEEPLX_API_TOKEN") {
            self.deeplx.api_token = Some(token);
        }

        if let Ok(timeout) = std::env::var("PO_TRANSLATE_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!("PO_TRANSLATE_TIMEOUT_SECS 不是有效的秒数: {}", timeout),
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.timeout_secs == 0 {
            return Err(TranslationError::ConfigError("超时时间不能为0".to_string()));
        }

        if self.google.endpoint.is_empty() {
            return Err(TranslationError::ConfigError(
                "Google 端点地址不能为空".to_string(),
            ));
        }

        if self.deeplx.api_url.is_empty() {
            return Err(TranslationError::ConfigError(
                "DeepLX API 地址不能为空".to_string(),
            ));
        }

        Ok(())
    }
}
