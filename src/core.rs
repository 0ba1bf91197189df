//! Core batch-translation pipeline.
//!
//! Walks the source directory, feeds every catalog entry through a
//! cached [`Translator`] and writes the filled catalogs to the
//! destination directory. Per-entry failures are isolated; only
//! configuration-level problems abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use polib::message::{MessageMutView, MessageView};

use crate::catalog::{find_catalog_files, load_catalog, save_catalog};
use crate::translation::config::{constants, BackendConfig};
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::translator::{select_translator, Translator};

/// Configuration options for a batch translation run
#[derive(Debug, Clone)]
pub struct Options {
    /// Language code to translate from
    pub source_lang: String,
    /// Language code to translate to
    pub target_lang: String,
    /// Directory containing the catalogs to translate
    pub source_dir: PathBuf,
    /// Directory the translated catalogs are written to
    pub destination_dir: PathBuf,
    /// Name of the translation backend to use
    pub backend: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source_lang: constants::DEFAULT_SOURCE_LANG.to_string(),
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),
            source_dir: PathBuf::from(constants::DEFAULT_UNTRANSLATED_PATH),
            destination_dir: PathBuf::from(constants::DEFAULT_TRANSLATED_PATH),
            backend: constants::DEFAULT_BACKEND.to_string(),
        }
    }
}

/// Per-file translation statistics
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStats {
    pub entries: usize,
    pub translated: usize,
    pub failed: usize,
}

/// Whole-run translation statistics
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    pub files: usize,
    pub entries: usize,
    pub translated: usize,
    pub failed: usize,
}

impl RunStats {
    fn add_file(&mut self, stats: FileStats) {
        self.files += 1;
        self.entries += stats.entries;
        self.translated += stats.translated;
        self.failed += stats.failed;
    }
}

/// Translates a single catalog file, writing the result to `dest`.
///
/// Every singular entry is translated from its `msgid`; plural entries
/// and the header are left untouched. One success/failure line per
/// entry is printed to standard output.
pub fn process_file(
    source: &Path,
    dest: &Path,
    translator: &mut Translator,
) -> TranslationResult<FileStats> {
    let mut catalog = load_catalog(source)?;
    let mut stats = FileStats::default();

    for mut message in catalog.messages_mut() {
        if message.is_plural() || message.msgid().is_empty() {
            continue;
        }

        stats.entries += 1;
        let msgid = message.msgid().to_string();

        match translator.translate(&msgid) {
            Some(translated) => {
                message.set_msgstr(translated).map_err(|e| {
                    TranslationError::CatalogError(format!(
                        "failed to set msgstr for '{}': {}",
                        msgid, e
                    ))
                })?;
                stats.translated += 1;
                println!("Translated {} successfully.", msgid);
            }
            None => {
                stats.failed += 1;
                println!("Translated {} failed.", msgid);
            }
        }
    }

    save_catalog(&catalog, dest)?;
    Ok(stats)
}

/// Runs the complete batch translation described by `options`.
///
/// Backend credentials and endpoints are loaded once from the
/// configuration sources before any translation call.
pub fn run(options: &Options) -> TranslationResult<RunStats> {
    let config = BackendConfig::load()?;
    run_with_config(options, &config)
}

/// Same as [`run`] but with an already-loaded backend configuration.
pub fn run_with_config(options: &Options, config: &BackendConfig) -> TranslationResult<RunStats> {
    let files = find_catalog_files(&options.source_dir)?;
    if files.is_empty() {
        return Err(TranslationError::NoCatalogsFound {
            path: options.source_dir.display().to_string(),
        });
    }

    let mut translator = select_translator(
        &options.backend,
        &options.source_lang,
        &options.target_lang,
        config,
    )?;

    fs::create_dir_all(&options.destination_dir)?;

    let mut totals = RunStats::default();
    for file in &files {
        let file_name = file.file_name().unwrap_or_default();
        let dest = options.destination_dir.join(file_name);

        tracing::info!("正在翻译 {}", file.display());
        let stats = process_file(file, &dest, &mut translator)?;
        tracing::info!(
            "{}: {} 条成功, {} 条失败",
            file.display(),
            stats.translated,
            stats.failed
        );

        totals.add_file(stats);
    }

    let cache = translator.cache_stats();
    tracing::info!(
        "翻译完成: {} 个文件, {} 条成功, {} 条失败, 缓存命中率 {:.1}%",
        totals.files,
        totals.translated,
        totals.failed,
        cache.hit_rate() * 100.0
    );

    Ok(totals)
}
