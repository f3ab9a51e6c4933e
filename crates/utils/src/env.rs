// Copyright 2024 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

/// Read a byte count from the environment variable, accepting an optional `K`/`M` suffix.
///
/// Returns `None` when the variable is unset or does not parse.
pub fn byte_count_env_var(name: &str) -> Option<usize> {
	let val = std::env::var(name).ok()?;
	parse_byte_count(val.trim())
}

fn parse_byte_count(val: &str) -> Option<usize> {
	let (digits, scale) = match val.as_bytes().last()? {
		b'K' | b'k' => (&val[..val.len() - 1], 1 << 10),
		b'M' | b'm' => (&val[..val.len() - 1], 1 << 20),
		_ => (val, 1),
	};
	digits.parse::<usize>().ok()?.checked_mul(scale)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unset_flag_is_false() {
		assert!(!boolean_env_flag_set("TIGERGATUN_TEST_FLAG_THAT_IS_NEVER_SET"));
		assert_eq!(byte_count_env_var("TIGERGATUN_TEST_FLAG_THAT_IS_NEVER_SET"), None);
	}

	#[test]
	fn test_parse_byte_count() {
		assert_eq!(parse_byte_count("100"), Some(100));
		assert_eq!(parse_byte_count("4K"), Some(4096));
		assert_eq!(parse_byte_count("1m"), Some(1 << 20));
		assert_eq!(parse_byte_count(""), None);
		assert_eq!(parse_byte_count("K"), None);
		assert_eq!(parse_byte_count("12x"), None);
	}
}
