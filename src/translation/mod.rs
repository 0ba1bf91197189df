//! # 翻译模块
//!
//! 翻译系统的核心抽象：带缓存的翻译器、后端选择器以及两个 HTTP 后端实现。
//!
//! ## 模块组织
//!
//! - `backends` - google / deeplx 后端与后端契约
//! - `cache` - 进程内翻译结果缓存
//! - `config` - 后端配置（配置文件 + 环境变量）
//! - `error` - 统一错误类型
//! - `translator` - 翻译器与后端选择器

pub mod backends;
pub mod cache;
pub mod config;
pub mod error;
pub mod translator;

// Re-export commonly used items for convenience
pub use cache::{cache_key, CacheStats, TranslationCache};
pub use error::{TranslationError, TranslationResult};
pub use translator::{registered_backends, select_translator, Translator};
