use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter for `--verbose` runs of binaries
const VERBOSE_FILTER: &str = "activity_duration=debug,calorie_burnt=debug,steps=debug,info";
const DEFAULT_FILTER: &str = "info";

/// Init stderr logger for binaries. `RUST_LOG` has priority over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            true => VERBOSE_FILTER,
            false => DEFAULT_FILTER,
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
