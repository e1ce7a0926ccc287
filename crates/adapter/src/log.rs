//! Logger setup

use std::env;

use log::LevelFilter;

/// Install `env_logger` at info level, or debug when `debug_enabled`.
///
/// `RUST_LOG` overrides the default filter when set. Returns false if a
/// logger was already installed (tests, embedding hosts).
pub fn init_logger(debug_enabled: bool) -> bool {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    let installed = builder.try_init().is_ok();
    if installed {
        log::info!("logger initialized at {level:?} level");
    }
    installed
}
