// Copyright 2023 Ulvetanna Inc.

use crate::env::boolean_env_flag_set;

/// Installs a global `tracing` subscriber for binaries and benchmarks.
///
/// Events are filtered with `RUST_LOG` (defaulting to `info`). Setting `TIGERGATUN_LOG_COMPACT`
/// switches to the single-line formatter. Calling this more than once is harmless.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let result = if boolean_env_flag_set("TIGERGATUN_LOG_COMPACT") {
		tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer().compact())
			.try_init()
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer())
			.try_init()
	};

	if let Err(err) = result {
		tracing::debug!(%err, "keeping the already installed tracing subscriber");
	}
}

#[cfg(test)]
mod tests {
	use super::init_tracing;

	#[test]
	fn test_repeated_init_keeps_first_subscriber() {
		init_tracing();
		init_tracing();
		tracing::info!("still logging after the second init");
	}
}
