use std::{env, fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Result;

const DEFAULT_LOG_FILE: &str = "program.log";

/// Initialize tracing for the watcher.
///
/// Log lines go both to stdout and to an append-only file (`program.log`
/// unless `LOG_FILE` says otherwise). Default: debug for the workspace
/// crates, info for everything else. Can be overridden with `RUST_LOG`.
pub fn init() -> Result<()> {
    let path = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(&path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,hwb=debug,hwb_core=debug,hwb_practicum=debug,hwb_telegram=debug")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_ansi(true))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
