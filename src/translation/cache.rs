//! 翻译缓存模块
//!
//! 为单个翻译器实例提供进程内的翻译结果缓存，避免对重复字符串的
//! 冗余网络调用。缓存与翻译器同生命周期，进程结束即销毁，
//! 条目在运行期间不会过期或被驱逐。

use std::collections::HashMap;

/// 缓存统计信息
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStats {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub total_entries: usize,
}

impl CacheStats {
    /// 计算缓存命中率
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_requests as f64
        }
    }
}

/// 翻译缓存
///
/// 键由 (原文, 源语言, 目标语言) 三元组生成，见 [`cache_key`]。
/// 同一个键对应同一个翻译结果；插入会覆盖旧值。
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<String, String>,
    stats: CacheStats,
}

impl TranslationCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取缓存条目，同时更新命中统计
    pub fn get(&mut self, key: &str) -> Option<&str> {
        self.stats.total_requests += 1;

        match self.entries.get(key) {
            Some(value) => {
                self.stats.cache_hits += 1;
                Some(value.as_str())
            }
            None => {
                self.stats.cache_misses += 1;
                None
            }
        }
    }

    /// 插入缓存条目，覆盖同键旧值
    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
        self.stats.total_entries = self.entries.len();
    }

    /// 检查是否包含指定键
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 获取缓存大小
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 获取统计信息快照
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// 生成缓存键
///
/// 纯函数：同一三元组总是产生同一个键。语言代码在前，
/// 保证不同语言方向的同一原文互不冲突。
pub fn cache_key(text: &str, source_lang: &str, target_lang: &str) -> String {
    format!("{}:{}:{}", source_lang, target_lang, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_basic_operations() {
        let mut cache = TranslationCache::new();
        assert!(cache.is_empty());

        // 测试插入和获取
        cache.insert("en:et:hello".to_string(), "tere".to_string());
        assert_eq!(cache.get("en:et:hello"), Some("tere"));
        assert_eq!(cache.get("en:et:world"), None);

        // 测试大小
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key("en:et:hello"));
        assert!(!cache.contains_key("en:et:world"));

        // 测试覆盖
        cache.insert("en:et:hello".to_string(), "tervist".to_string());
        assert_eq!(cache.get("en:et:hello"), Some("tervist"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = TranslationCache::new();

        cache.insert("en:et:hello".to_string(), "tere".to_string());

        // 命中
        cache.get("en:et:hello");
        // 未命中
        cache.get("en:et:world");

        let stats = cache.stats();
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.cache_misses, 1);
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_cache_key_deterministic() {
        let a = cache_key("Hello", "en", "et");
        let b = cache_key("Hello", "en", "et");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cache_key_distinguishes_triples() {
        let keys = [
            cache_key("Hello", "en", "et"),
            cache_key("Hello", "en", "zh"),
            cache_key("Hello", "et", "en"),
            cache_key("World", "en", "et"),
        ];

        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
