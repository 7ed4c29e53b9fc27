use log::LevelFilter;

/// Route the library's `log` output to stderr.
///
/// `RUST_LOG` still supplies per-module filters; `level` from `--log-level`
/// sets the global ceiling.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
