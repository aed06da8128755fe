//! Logger setup for the command-line binary

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
///
/// `verbosity` counts `-v` flags: 0 warns only, 1 adds info, 2 debug, 3 or more trace.
/// `RUST_LOG` still overrides the default level. Later calls are no-ops.
pub fn init_logger(verbosity: u8) {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(level_for(verbosity))
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        log::debug!("Logging initialized at verbosity {verbosity}");
    });
}

fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
