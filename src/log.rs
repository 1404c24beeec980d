// src/log.rs
// Console output plus a debug log under .store/, both via tracing.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, time::uptime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::consts::{DEBUG_LOG_FILE, STORE_DIR};

/// Install the global subscriber. `RUST_LOG` wins over `verbosity`
/// (0 = info, 1 = debug, 2+ = trace). Safe to call twice; the second call is a no-op.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("club_roster={level},warn")));

    let console = fmt::layer()
        .compact()
        .with_target(false)
        .with_timer(uptime())
        .with_filter(console_filter);

    // The debug file is best-effort: no file, no file layer.
    let file_layer = open_debug_log().map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_timer(uptime())
            .with_writer(Mutex::new(file))
            .with_filter(EnvFilter::new("club_roster=debug"))
    });

    let _ = tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init();
}

fn open_debug_log() -> Option<fs::File> {
    fs::create_dir_all(STORE_DIR).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(STORE_DIR).join(DEBUG_LOG_FILE))
        .ok()
}
