//! Google 网页翻译后端
//!
//! 使用 translate.googleapis.com 的 gtx 网页端点，无需凭据。
//! 响应是嵌套的 JSON 数组：第一个元素是分段数组，每段的第 0 项为译文片段。

use std::time::Duration;

use serde_json::Value;

use crate::translation::backends::TranslationBackend;
use crate::translation::config::GoogleConfig;
use crate::translation::error::{TranslationError, TranslationResult};

pub struct GoogleBackend {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GoogleBackend {
    /// 创建已配置的 Google 后端
    pub fn new(config: &GoogleConfig, timeout_secs: u64) -> TranslationResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// 从 gtx 响应中拼出完整译文
    ///
    /// 长文本会被服务端切成多段，逐段取第 0 项拼接。
    fn extract_translation(value: &Value) -> TranslationResult<String> {
        let segments = value
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| TranslationError::ParseError("Google 响应缺少分段数组".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(part);
            }
        }

        Ok(translated)
    }
}

impl TranslationBackend for GoogleBackend {
    fn name(&self) -> &'static str {
        "google"
    }

    fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("q", text),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(TranslationError::TranslationServiceError(format!(
                "Google 返回 HTTP {}",
                response.status()
            )));
        }

        let value: Value = response.json()?;
        Self::extract_translation(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_translation_segments() {
        // 真实 gtx 响应的简化形态：多段译文 + 尾部元数据
        let value: Value = serde_json::from_str(
            r#"[[["Tere ","Hello ",null,null,10],["maailm","world",null,null,10]],null,"en"]"#,
        )
        .unwrap();

        assert_eq!(
            GoogleBackend::extract_translation(&value).unwrap(),
            "Tere maailm"
        );
    }

    #[test]
    fn test_extract_translation_rejects_malformed() {
        let value: Value = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert!(GoogleBackend::extract_translation(&value).is_err());
    }
}
