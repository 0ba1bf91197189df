//! DeepLX 翻译后端
//!
//! 面向自建的 DeepLX 服务：POST JSON 请求，可选 Bearer 令牌鉴权。
//! 响应的 `code` 必须为 200，译文在 `data` 字段中。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::translation::backends::TranslationBackend;
use crate::translation::config::DeepLxConfig;
use crate::translation::error::{TranslationError, TranslationResult};

/// DeepLX 请求体
#[derive(Debug, Serialize)]
struct DeepLxRequest<'a> {
    text: &'a str,
    source_lang: String,
    target_lang: String,
}

/// DeepLX 响应体
#[derive(Debug, Deserialize)]
struct DeepLxResponse {
    code: i64,
    #[serde(default)]
    data: Option<String>,
}

pub struct DeepLxBackend {
    client: reqwest::blocking::Client,
    api_url: String,
    api_token: Option<String>,
}

impl DeepLxBackend {
    /// 创建已配置的 DeepLX 后端
    pub fn new(config: &DeepLxConfig, timeout_secs: u64) -> TranslationResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        })
    }
}

impl TranslationBackend for DeepLxBackend {
    fn name(&self) -> &'static str {
        "deeplx"
    }

    fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        // DeepL 系列接口使用大写语言代码
        let body = DeepLxRequest {
            text,
            source_lang: source_lang.to_uppercase(),
            target_lang: target_lang.to_uppercase(),
        };

        let mut request = self.client.post(&self.api_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(TranslationError::TranslationServiceError(format!(
                "DeepLX 返回 HTTP {}",
                response.status()
            )));
        }

        let parsed: DeepLxResponse = response.json()?;
        if parsed.code != 200 {
            return Err(TranslationError::TranslationServiceError(format!(
                "DeepLX 返回错误码 {}",
                parsed.code
            )));
        }

        Ok(parsed.data.unwrap_or_default())
    }
}
