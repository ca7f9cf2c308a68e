use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Installs the stderr subscriber. `RUST_LOG` overrides the verbosity ladder.
pub fn init_logging(verbosity: u8) {
	// 0 = errors only (driver warnings suppressed, stdout stays JSON)
	// 1 (-v) = driver command outcomes
	// 2+ (-vv) = every gate and script invocation
	let filter = match verbosity {
		0 => "error,wd=off",
		1 => "warn,wd=info",
		_ => "debug",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}
