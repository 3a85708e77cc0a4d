//! `apply-conclusions`: rewrite the content store with the master conclusions

use anyhow::Context;
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wayback_conclusions::{apply_to_store, ConclusionMap, WriterError};
use wayback_content::{ContentStore, DEFAULT_STORE_PATH};

fn cli() -> Command {
    Command::new("apply-conclusions")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Stamp the master conclusions into every year of the content store")
        .arg(
            Arg::new("data")
                .long("data")
                .env("WAYBACK_DATA")
                .default_value(DEFAULT_STORE_PATH)
                .value_parser(value_parser!(PathBuf))
                .help("Content store to rewrite in place"),
        )
        .arg(
            Arg::new("conclusions")
                .long("conclusions")
                .value_parser(value_parser!(PathBuf))
                .help("JSON catalog to use instead of the bundled master conclusions"),
        )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let fatal_load = err
                .downcast_ref::<WriterError>()
                .is_some_and(WriterError::is_fatal_load);
            ExitCode::from(if fatal_load { 2 } else { 1 })
        }
    }
}

fn run() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let data = matches
        .get_one::<PathBuf>("data")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
    let conclusions = match matches.get_one::<PathBuf>("conclusions") {
        Some(path) => ConclusionMap::from_path(path)
            .with_context(|| format!("loading conclusions from {}", path.display()))?,
        None => ConclusionMap::master(),
    };

    let store = ContentStore::new(&data);
    let report = apply_to_store(&store, &conclusions)
        .with_context(|| format!("applying conclusions to {}", data.display()))?;

    println!("{report}");
    Ok(())
}
