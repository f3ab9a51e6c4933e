// Copyright 2023-2024 Ulvetanna Inc.

use digest::{FixedOutputReset, Output, OutputSizeUser};
use tigergatun_utils::{ensure, serialization::Error as SerializationError};

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("Output buffer has {actual} bytes but the digest is {expected} bytes")]
	SizeMismatch { expected: usize, actual: usize },
	#[error("Context snapshot has {count} unexpected trailing bytes")]
	TrailingBytes { count: usize },
	#[error("Serialization error: {0}")]
	Serialization(#[from] SerializationError),
}

/// Finalizes `hasher` into a caller-provided byte slice and resets it.
///
/// The slice must be exactly the digest size. On a size mismatch nothing is written and the
/// hasher keeps its state, so the caller can retry with a correct buffer.
pub fn finalize_into_slice<D: FixedOutputReset>(
	hasher: &mut D,
	out: &mut [u8],
) -> Result<(), HashError> {
	let expected = <D as OutputSizeUser>::output_size();
	ensure!(
		out.len() == expected,
		HashError::SizeMismatch {
			expected,
			actual: out.len(),
		}
	);

	hasher.finalize_into_reset(Output::<D>::from_mut_slice(out));
	Ok(())
}
