use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber: compact fmt output on stderr, filtered by
/// `RUST_LOG` when set and by `default_level` otherwise.
pub fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let initialized = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .with_filter(env_filter),
        )
        .try_init();

    if let Err(e) = initialized {
        eprintln!("Logging already initialized: {}", e);
    }
}
