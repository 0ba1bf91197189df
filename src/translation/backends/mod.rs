//! 翻译后端实现
//!
//! 每个后端变体拥有自己的 HTTP 客户端、凭据配置和响应文本提取方式。
//! 后端只负责一次同步网络调用；缓存与失败兜底由上层翻译器统一完成。

pub mod deeplx;
pub mod google;

pub use deeplx::DeepLxBackend;
pub use google::GoogleBackend;

use crate::translation::error::TranslationResult;

/// 翻译后端契约
pub trait TranslationBackend {
    /// 后端名称，用于日志与诊断
    fn name(&self) -> &'static str;

    /// 调用外部翻译服务，返回译文
    ///
    /// 传输失败、鉴权失败或响应格式异常时返回错误；
    /// 服务正常但没有产出译文时返回空字符串。
    fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String>;
}
