// Copyright 2024-2025 Irreducible Inc.

/// Returns early with the given error, converted with `Into`.
///
/// With the `bail_panic` feature enabled the macro panics instead, which makes it easy to get a
/// backtrace pointing at the exact check that failed.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

/// Bails with `$err` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct Rejected(usize);

	fn accept_even(value: usize) -> Result<usize, Rejected> {
		ensure!(value % 2 == 0, Rejected(value));
		Ok(value / 2)
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(accept_even(8), Ok(4));
	}

	#[test]
	fn test_ensure_returns_error() {
		assert_eq!(accept_even(7), Err(Rejected(7)));
	}
}
