use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; the settings file can
/// raise it to `debug`, in which case `RUST_LOG` may override the filter.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Ignore RUST_LOG here so a stray environment variable does not make
        // the overlay chatty.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
