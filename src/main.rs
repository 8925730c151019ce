//! Worst-case search/sort benchmark
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌──────────────────────┐    ┌──────────┐
//! │  Config  │───▶│ Base array │───▶│ Harness (per size N) │───▶│  stdout  │
//! │  (YAML)  │    │  (seeded)  │    │ linear/binary/bubble │    │  (CSV)   │
//! └──────────┘    └────────────┘    └──────────────────────┘    └──────────┘
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use worstcase_bench::bench::Harness;
use worstcase_bench::config::{AppConfig, CONFIG_PATH};
use worstcase_bench::logging::init_logging;

fn run() -> Result<()> {
    let app_config = AppConfig::load(CONFIG_PATH)
        .with_context(|| format!("Failed to load {}", CONFIG_PATH))?;
    let _log_guard = init_logging(&app_config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_HASH"),
        sizes = ?app_config.bench.sizes,
        "Starting worst-case benchmark"
    );

    let harness = Harness::new(&app_config.bench).context("Failed to prepare base array")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness.run(&mut out).context("Benchmark run failed")?;

    tracing::info!("Benchmark complete");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
