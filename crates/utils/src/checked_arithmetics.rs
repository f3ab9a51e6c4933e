// Copyright 2024 Irreducible Inc.

/// Division implementation that fails in case when `a` isn't divisible by `b`.
///
/// Used to derive word and round counts from byte sizes, where a remainder would mean the
/// layout constants disagree with each other.
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	let result = a / b;
	assert!(b * result == a);

	result
}
