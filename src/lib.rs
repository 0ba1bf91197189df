//! # PO Translate Library
//!
//! 将 gettext PO 消息目录批量翻译为目标语言的工具库，
//! 翻译工作委托给可插拔的在线翻译后端。
//!
//! ## 模块组织
//!
//! - `core` - 核心批处理流程
//! - `catalog` - PO 目录的发现与读写
//! - `translation` - 翻译器、后端与缓存（核心抽象）

pub mod catalog;
pub mod core;
pub mod translation;

// Re-export commonly used items for convenience
pub use crate::core::{process_file, run, run_with_config, Options, RunStats};
pub use crate::translation::{select_translator, TranslationError, TranslationResult, Translator};
