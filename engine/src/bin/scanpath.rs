//! CLI entry point: ingest a single ScanCode result file and print the resulting `ScanResult` as
//! JSON. Mirrors the teacher's `main.rs` tracing-subscriber init, minus the server/db/scanner
//! bring-up this engine has no use for.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scancode_engine::config::EngineConfig;
use scancode_engine::options::ScanOptions;
use scancode_engine::scan_path;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scancode_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let result_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: scanpath <result.json> [scanner-name] [scanner-version]");
            return ExitCode::FAILURE;
        }
    };
    let scanner_name = args.next().unwrap_or_else(|| "ScanCode".to_string());
    let scanner_version = args.next().unwrap_or_else(|| "unknown".to_string());

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("configuration loaded successfully");

    let options = ScanOptions {
        command_line: vec!["--license".to_string(), "--copyright".to_string()],
        output_format: "--json-pp".to_string(),
        ..ScanOptions::default()
    };

    match scan_path(&result_path, &scanner_name, &scanner_version, &options, &config) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!("failed to serialize scan result: {}", err);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            tracing::error!("scan failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
