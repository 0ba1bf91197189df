//! 命令行入口

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use po_translate::core::{run, Options};
use po_translate::translation::config::constants;

#[derive(Parser)]
#[command(name = "po-translate")]
#[command(version)]
#[command(about = "Automatically translate PO files using an online translation backend")]
struct Cli {
    /// Source language you want to translate from
    #[arg(long, default_value = constants::DEFAULT_SOURCE_LANG)]
    fro: String,

    /// Destination language you want to translate to
    #[arg(long, default_value = constants::DEFAULT_TARGET_LANG)]
    to: String,

    /// Source directory of the files you want to translate
    #[arg(long, default_value = constants::DEFAULT_UNTRANSLATED_PATH)]
    src: PathBuf,

    /// Destination directory you want the translated files to end up in
    #[arg(long, default_value = constants::DEFAULT_TRANSLATED_PATH)]
    dest: PathBuf,

    /// Translator engine you want to use
    #[arg(long, default_value = constants::DEFAULT_BACKEND)]
    translator: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let options = Options {
        source_lang: cli.fro,
        target_lang: cli.to,
        source_dir: cli.src,
        destination_dir: cli.dest,
        backend: cli.translator,
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
