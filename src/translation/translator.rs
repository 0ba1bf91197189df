//! 翻译器与后端选择器
//!
//! [`Translator`] 在一个后端之上叠加进程内缓存，并把所有后端失败
//! 收敛为"无结果"，保证单条翻译失败不会中断整批处理。
//! [`select_translator`] 通过静态注册表把配置名映射到后端构造函数，
//! 变体集合在编译期封闭。

use crate::translation::backends::{DeepLxBackend, GoogleBackend, TranslationBackend};
use crate::translation::cache::{cache_key, CacheStats, TranslationCache};
use crate::translation::config::{constants, BackendConfig};
use crate::translation::error::{TranslationError, TranslationResult};

/// 带缓存的翻译器
///
/// 每个实例持有独立的缓存，按 (原文, 源语言, 目标语言) 去重。
pub struct Translator {
    backend: Box<dyn TranslationBackend>,
    cache: TranslationCache,
    source_lang: String,
    target_lang: String,
}

impl Translator {
    /// 用给定后端创建翻译器
    ///
    /// `source_lang` 省略时默认为英语。
    pub fn new(
        backend: Box<dyn TranslationBackend>,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Self {
        Self {
            backend,
            cache: TranslationCache::new(),
            source_lang: source_lang
                .unwrap_or(constants::DEFAULT_SOURCE_LANG)
                .to_string(),
            target_lang: target_lang.to_string(),
        }
    }

    /// 翻译单个字符串
    ///
    /// 1. 计算缓存键，命中则直接返回缓存值，不触发网络调用；
    /// 2. 未命中时调用后端；
    /// 3. 后端失败只记录日志并返回 `None`，绝不向上抛出；
    /// 4. 成功且非空的译文写入缓存后返回；
    /// 5. 空译文返回 `None` 且不写缓存，下次调用仍会重试后端。
    pub fn translate(&mut self, text: &str) -> Option<String> {
        let key = cache_key(text, &self.source_lang, &self.target_lang);

        if let Some(cached) = self.cache.get(&key) {
            return Some(cached.to_string());
        }

        match self
            .backend
            .translate_text(text, &self.source_lang, &self.target_lang)
        {
            Ok(translated) if !translated.is_empty() => {
                self.cache.insert(key, translated.clone());
                Some(translated)
            }
            Ok(_) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    "翻译结果为空, text: {}",
                    text
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    backend = self.backend.name(),
                    "{} - 翻译失败, text: {}",
                    e,
                    text
                );
                None
            }
        }
    }

    /// 后端名称
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// 缓存统计快照
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// 后端构造函数类型
type BackendFactory = fn(&BackendConfig) -> TranslationResult<Box<dyn TranslationBackend>>;

/// 静态后端注册表
const BACKENDS: &[(&str, BackendFactory)] = &[
    ("google", |config| {
        Ok(Box::new(GoogleBackend::new(
            &config.google,
            config.timeout_secs,
        )?))
    }),
    ("deeplx", |config| {
        Ok(Box::new(DeepLxBackend::new(
            &config.deeplx,
            config.timeout_secs,
        )?))
    }),
];

/// 已注册的后端名称列表
pub fn registered_backends() -> Vec<&'static str> {
    BACKENDS.iter().map(|(name, _)| *name).collect()
}

/// 按配置名选择并构造翻译器
///
/// 未注册的名字立即失败，不会静默回退到默认后端。
pub fn select_translator(
    name: &str,
    source_lang: &str,
    target_lang: &str,
    config: &BackendConfig,
) -> TranslationResult<Translator> {
    let factory = BACKENDS
        .iter()
        .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
        .map(|(_, factory)| factory)
        .ok_or_else(|| TranslationError::UnknownBackend {
            name: name.to_string(),
            available: registered_backends().join(", "),
        })?;

    let backend = factory(config)?;
    Ok(Translator::new(backend, target_lang, Some(source_lang)))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    /// 可编程的后端桩，记录调用次数
    struct StubBackend {
        replies: HashMap<String, String>,
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl StubBackend {
        fn new(replies: &[(&str, &str)]) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            let stub = Self {
                replies: replies
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                calls: Rc::clone(&calls),
                fail: false,
            };
            (stub, calls)
        }

        fn failing() -> (Self, Rc<Cell<usize>>) {
            let (mut stub, calls) = Self::new(&[]);
            stub.fail = true;
            (stub, calls)
        }
    }

    impl TranslationBackend for StubBackend {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn translate_text(
            &self,
            text: &str,
            _source_lang: &str,
            _target_lang: &str,
        ) -> TranslationResult<String> {
            self.calls.set(self.calls.get() + 1);

            if self.fail {
                return Err(TranslationError::NetworkError("connection refused".to_string()));
            }
            Ok(self.replies.get(text).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_repeated_translate_hits_cache() {
        let (stub, calls) = StubBackend::new(&[("hello", "tere")]);
        let mut translator = Translator::new(Box::new(stub), "et", Some("en"));

        let first = translator.translate("hello");
        let second = translator.translate("hello");

        assert_eq!(first.as_deref(), Some("tere"));
        assert_eq!(first, second);
        // 第二次调用必须命中缓存，后端只被调用一次
        assert_eq!(calls.get(), 1);
        assert_eq!(translator.cache_stats().cache_hits, 1);
    }

    #[test]
    fn test_backend_failure_returns_none() {
        let (stub, calls) = StubBackend::failing();
        let mut translator = Translator::new(Box::new(stub), "et", Some("en"));

        assert_eq!(translator.translate("hello"), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_empty_result_not_cached() {
        let (stub, calls) = StubBackend::new(&[]);
        let mut translator = Translator::new(Box::new(stub), "et", Some("en"));

        assert_eq!(translator.translate("hello"), None);
        assert_eq!(translator.cache_stats().total_entries, 0);

        // 空结果没有写缓存，重试仍会触发后端
        assert_eq!(translator.translate("hello"), None);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_per_string_failure_is_isolated() {
        let (stub, _) = StubBackend::new(&[("hello", "tere")]);
        let mut translator = Translator::new(Box::new(stub), "et", Some("en"));

        assert_eq!(translator.translate("world"), None);
        assert_eq!(translator.translate("hello").as_deref(), Some("tere"));
    }

    #[test]
    fn test_source_lang_defaults_to_english() {
        let (stub, _) = StubBackend::new(&[]);
        let translator = Translator::new(Box::new(stub), "et", None);
        assert_eq!(translator.source_lang, "en");
    }

    #[test]
    fn test_select_translator_unknown_backend() {
        let config = BackendConfig::default();
        let result = select_translator("Unknown", "en", "et", &config);

        match result {
            Err(TranslationError::UnknownBackend { name, available }) => {
                assert_eq!(name, "Unknown");
                assert!(available.contains("google"));
                assert!(available.contains("deeplx"));
            }
            _ => panic!("expected UnknownBackend error"),
        }
    }

    #[test]
    fn test_select_translator_registered_backends() {
        let config = BackendConfig::default();

        let google = select_translator("google", "en", "et", &config).unwrap();
        assert_eq!(google.backend_name(), "google");

        // 名称匹配不区分大小写
        let deeplx = select_translator("DeepLX", "en", "et", &config).unwrap();
        assert_eq!(deeplx.backend_name(), "deeplx");
    }
}
