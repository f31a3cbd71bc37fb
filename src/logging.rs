use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` wins unless `debug` is set
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("quotegen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
