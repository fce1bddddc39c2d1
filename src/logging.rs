use flexi_logger::{opt_format, Logger};

/// Initializes logging for binaries and experiments embedding the engine.
/// Level comes from `RUST_LOG`, falling back to "info". Call at most once.
pub fn setup_logging() {
    Logger::try_with_env_or_str("info")
        .unwrap()
        .format(opt_format)
        .start()
        .unwrap();
}
