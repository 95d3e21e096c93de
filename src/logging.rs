use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber used by the binary.
///
/// Without `-v`, `RUST_LOG` decides and the fallback is `warn`. Each `-v`
/// raises this crate's level (`debug`, then `trace`) regardless of
/// `RUST_LOG`. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,cpu_sched_sim=debug"),
        _ => EnvFilter::new("warn,cpu_sched_sim=trace"),
    };

    // A subscriber installed earlier (e.g. by a test harness) wins.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
