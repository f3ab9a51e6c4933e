// Copyright 2024-2025 Irreducible Inc.

/// A compression function in the Merkle–Damgård sense: it folds one message block into a
/// fixed-size chaining state.
///
/// Implementations are pure. The same `(state, block)` pair always maps to the same output, which
/// lets the function be used outside of the streaming hashers built on top of it.
pub trait CompressionFunction<S, B: ?Sized>: Clone {
	fn compress(&self, state: S, block: &B) -> S;
}
