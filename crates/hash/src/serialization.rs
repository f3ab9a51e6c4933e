// Copyright 2024 Irreducible Inc.

//! Persisting and resuming running hash computations.
//!
//! Every hasher in this crate implements [`SerializeBytes`] and [`DeserializeBytes`] with an
//! explicit little-endian layout, so a snapshot taken on one platform resumes on any other.

use bytes::Buf;
use tigergatun_utils::{bail, DeserializeBytes, SerializeBytes};

use crate::HashError;

/// Serializes the running state of `hasher` into a fresh buffer.
pub fn snapshot<D: SerializeBytes>(hasher: &D) -> Vec<u8> {
	let mut buf = Vec::new();
	hasher
		.serialize(&mut buf)
		.expect("Vec has unbounded capacity");
	buf
}

/// Restores a hasher from a snapshot produced by [`snapshot`].
///
/// The snapshot must be consumed exactly; leftover bytes mean it was produced for a different
/// hasher or got corrupted.
pub fn restore<D: DeserializeBytes>(mut snapshot: &[u8]) -> Result<D, HashError> {
	let hasher = D::deserialize(&mut snapshot)?;
	if snapshot.has_remaining() {
		tracing::debug!(trailing = snapshot.remaining(), "rejecting context snapshot");
		bail!(HashError::TrailingBytes {
			count: snapshot.remaining(),
		});
	}
	Ok(hasher)
}
