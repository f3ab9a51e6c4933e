// Copyright 2025 Irreducible Inc.

use std::{fmt, marker::PhantomData};

use digest::{core_api::AlgorithmName, FixedOutputReset};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tigergatun_hash::{
	finalize_into_slice, restore, snapshot, Digest, HashError, RadioGatun32, RadioGatun64, Tiger,
	Tiger2,
};
use tigergatun_utils::{serialization::Error as SerializationError, DeserializeBytes, SerializeBytes};

fn hash_in_chunks<D: Digest>(data: &[u8], chunk_lens: &[usize]) -> Vec<u8> {
	let mut hasher = D::new();
	let mut rest = data;
	for &len in chunk_lens.iter().cycle() {
		if rest.is_empty() {
			break;
		}
		let (head, tail) = rest.split_at(len.min(rest.len()));
		hasher.update(head);
		rest = tail;
	}
	hasher.finalize().to_vec()
}

/// Lengths around one, two and three blocks for a hasher with block size `block_len`.
fn boundary_lengths(block_len: usize) -> Vec<usize> {
	let mut lens = vec![0, 1];
	for blocks in 1..=3 {
		let len = blocks * block_len;
		lens.extend([len - 1, len, len + 1]);
	}
	lens.push(3 * block_len + block_len / 2);
	lens
}

fn check_chunking_invariance<D: Digest>(block_len: usize) {
	let mut rng = StdRng::seed_from_u64(0);
	for len in boundary_lengths(block_len) {
		let mut data = vec![0u8; len];
		rng.fill(data.as_mut_slice());
		let expected = D::digest(&data).to_vec();

		assert_eq!(hash_in_chunks::<D>(&data, &[1]), expected, "single bytes, length {len}");
		assert_eq!(hash_in_chunks::<D>(&data, &[block_len]), expected, "blocks, length {len}");
		assert_eq!(
			hash_in_chunks::<D>(&data, &[block_len - 1, 2]),
			expected,
			"straddling blocks, length {len}"
		);

		for _ in 0..8 {
			let chunk_lens: Vec<usize> = (0..4).map(|_| rng.gen_range(1..=2 * block_len)).collect();
			assert_eq!(
				hash_in_chunks::<D>(&data, &chunk_lens),
				expected,
				"chunks {chunk_lens:?}, length {len}"
			);
		}
	}
}

#[test]
fn test_chunking_invariance() {
	check_chunking_invariance::<Tiger>(64);
	check_chunking_invariance::<Tiger2>(64);
	check_chunking_invariance::<RadioGatun32>(12);
	check_chunking_invariance::<RadioGatun64>(24);
}

#[test]
fn test_empty_updates_are_ignored() {
	let mut hasher = Tiger::new();
	hasher.update(b"");
	hasher.update(b"abc");
	hasher.update(b"");
	assert_eq!(hasher.finalize(), Tiger::digest(b"abc"));

	let mut hasher = RadioGatun64::new();
	hasher.update(b"");
	assert_eq!(hasher.finalize(), RadioGatun64::new().finalize());
}

proptest! {
	#[test]
	fn test_arbitrary_splits(
		data in proptest::collection::vec(any::<u8>(), 0..300),
		chunk_lens in proptest::collection::vec(1usize..80, 1..8),
	) {
		prop_assert_eq!(hash_in_chunks::<Tiger>(&data, &chunk_lens), Tiger::digest(&data).to_vec());
		prop_assert_eq!(hash_in_chunks::<Tiger2>(&data, &chunk_lens), Tiger2::digest(&data).to_vec());
		prop_assert_eq!(
			hash_in_chunks::<RadioGatun32>(&data, &chunk_lens),
			RadioGatun32::digest(&data).to_vec()
		);
		prop_assert_eq!(
			hash_in_chunks::<RadioGatun64>(&data, &chunk_lens),
			RadioGatun64::digest(&data).to_vec()
		);
	}

	#[test]
	fn test_tiger_variants_diverge(data in proptest::collection::vec(any::<u8>(), 0..200)) {
		prop_assert_ne!(Tiger::digest(&data), Tiger2::digest(&data));
	}
}

fn check_reset_after_finalize<D: Digest + FixedOutputReset>() {
	let mut hasher = <D as Digest>::new();
	Digest::update(&mut hasher, b"first message, long enough to fill more than one block of input");
	let _ = Digest::finalize_reset(&mut hasher);

	Digest::update(&mut hasher, b"abc");
	assert_eq!(Digest::finalize_reset(&mut hasher), D::digest(b"abc"));
	assert_eq!(Digest::finalize(hasher), D::digest(b""));
}

#[test]
fn test_reset_after_finalize() {
	check_reset_after_finalize::<Tiger>();
	check_reset_after_finalize::<Tiger2>();
	check_reset_after_finalize::<RadioGatun32>();
	check_reset_after_finalize::<RadioGatun64>();
}

fn check_clone_forks<D: Digest + Clone>() {
	let mut hasher = D::new();
	hasher.update(b"The quick brown fox jumps over the lazy ");
	let mut fork = hasher.clone();

	hasher.update(b"dog");
	fork.update(b"cog");
	assert_eq!(hasher.finalize(), D::digest(b"The quick brown fox jumps over the lazy dog"));
	assert_eq!(fork.finalize(), D::digest(b"The quick brown fox jumps over the lazy cog"));
}

#[test]
fn test_clone_forks_computation() {
	check_clone_forks::<Tiger>();
	check_clone_forks::<Tiger2>();
	check_clone_forks::<RadioGatun32>();
	check_clone_forks::<RadioGatun64>();
}

#[test]
fn test_dyn_digest() {
	let mut hashers: Vec<Box<dyn digest::DynDigest>> = vec![
		Box::new(Tiger::default()),
		Box::new(Tiger2::default()),
		Box::new(RadioGatun32::default()),
		Box::new(RadioGatun64::default()),
	];
	let expected = [
		Tiger::digest(b"abc").to_vec(),
		Tiger2::digest(b"abc").to_vec(),
		RadioGatun32::digest(b"abc").to_vec(),
		RadioGatun64::digest(b"abc").to_vec(),
	];

	for (hasher, expected) in hashers.iter_mut().zip(expected) {
		assert_eq!(hasher.output_size(), expected.len());
		hasher.update(b"abc");

		// A wrongly sized buffer is rejected without consuming the input.
		let mut short = vec![0u8; expected.len() - 1];
		assert!(hasher.finalize_into_reset(&mut short).is_err());

		let mut out = vec![0u8; expected.len()];
		hasher.finalize_into_reset(&mut out).unwrap();
		assert_eq!(out, expected);
	}
}

#[test]
fn test_finalize_into_slice() {
	let mut hasher = RadioGatun32::new();
	hasher.update(b"ab");

	let mut too_long = [0u8; 33];
	let err = finalize_into_slice(&mut hasher, &mut too_long).unwrap_err();
	assert!(matches!(err, HashError::SizeMismatch { expected: 32, actual: 33 }));
	assert_eq!(too_long, [0u8; 33]);

	// A failed call leaves the running state alone.
	hasher.update(b"c");
	let mut out = [0u8; 32];
	finalize_into_slice(&mut hasher, &mut out).unwrap();
	assert_eq!(out[..], RadioGatun32::digest(b"abc")[..]);

	let mut tiger = Tiger::new();
	let mut short = [0u8; 23];
	assert!(matches!(
		finalize_into_slice(&mut tiger, &mut short),
		Err(HashError::SizeMismatch { expected: 24, actual: 23 })
	));
}

fn check_snapshot_resume<D>(data: &[u8])
where
	D: Digest + SerializeBytes + DeserializeBytes,
{
	for split in [0, 1, data.len() / 2, data.len() - 1, data.len()] {
		let mut hasher = D::new();
		hasher.update(&data[..split]);

		let mut resumed: D = restore(&snapshot(&hasher)).unwrap();
		resumed.update(&data[split..]);
		hasher.update(&data[split..]);
		assert_eq!(resumed.finalize(), hasher.finalize(), "split at {split}");
	}
}

#[test]
fn test_snapshot_resumes_stream() {
	let data: Vec<u8> = (0..200u8).collect();
	check_snapshot_resume::<Tiger>(&data);
	check_snapshot_resume::<Tiger2>(&data);
	check_snapshot_resume::<RadioGatun32>(&data);
	check_snapshot_resume::<RadioGatun64>(&data);
}

#[test]
fn test_restore_rejects_other_algorithm() {
	let mut hasher = Tiger2::new();
	hasher.update(b"abc");
	let bytes = snapshot(&hasher);

	assert!(matches!(
		restore::<Tiger>(&bytes),
		Err(HashError::Serialization(SerializationError::UnknownEnumVariant { index: 2, .. }))
	));
	assert!(restore::<RadioGatun32>(&bytes).is_err());
}

#[test]
fn test_restore_rejects_truncated_snapshot() {
	let mut hasher = RadioGatun64::new();
	hasher.update(b"abcde");
	let bytes = snapshot(&hasher);

	for len in [0, 1, bytes.len() / 2, bytes.len() - 1] {
		assert!(matches!(
			restore::<RadioGatun64>(&bytes[..len]),
			Err(HashError::Serialization(SerializationError::NotEnoughBytes))
		));
	}

	let mut tiger = Tiger::new();
	tiger.update(b"abcde");
	let bytes = snapshot(&tiger);
	assert!(matches!(
		restore::<Tiger>(&bytes[..bytes.len() - 1]),
		Err(HashError::Serialization(SerializationError::NotEnoughBytes))
	));
}

/// Byte range of the total length inside a Tiger snapshot: after the tag and 3 chaining words.
const TIGER_LENGTH_FIELD: std::ops::Range<usize> = 25..33;

fn with_tiger_length(mut bytes: Vec<u8>, total_length: u64) -> Vec<u8> {
	bytes[TIGER_LENGTH_FIELD].copy_from_slice(&total_length.to_le_bytes());
	bytes
}

#[test]
fn test_tiger_length_counter_wraps() {
	let data: Vec<u8> = (0..200u8).collect();

	// 128 bytes short of the wrap, block aligned so nothing is buffered.
	let near_limit = with_tiger_length(snapshot(&Tiger::new()), u64::MAX - 127);
	let mut wrapped: Tiger = restore(&near_limit).unwrap();
	wrapped.update(&data);
	assert_eq!(wrapped.total_length(), 72);

	// Same blocks and tail, with the wrapped counter written in directly.
	let mut plain = Tiger::new();
	plain.update(&data);
	let expected_bytes = with_tiger_length(snapshot(&plain), 72);
	assert_eq!(snapshot(&wrapped), expected_bytes);

	let expected: Tiger = restore(&expected_bytes).unwrap();
	let digest = wrapped.finalize();
	assert_eq!(digest, expected.finalize());
	assert_ne!(digest, plain.finalize());
}

#[test]
fn test_restore_rejects_trailing_bytes() {
	let mut bytes = snapshot(&Tiger::new());
	bytes.push(0);
	assert!(matches!(restore::<Tiger>(&bytes), Err(HashError::TrailingBytes { count: 1 })));
}

#[test]
fn test_restore_rejects_oversized_fill() {
	let mut bytes = snapshot(&RadioGatun32::new());
	// Tag, then 19 mill words and 39 belt words, then the fill byte.
	let fill_offset = 1 + (19 + 39) * 4;
	assert_eq!(bytes.len(), fill_offset + 1);

	bytes[fill_offset] = 12;
	bytes.extend([0u8; 12]);
	assert!(matches!(
		restore::<RadioGatun32>(&bytes),
		Err(HashError::Serialization(SerializationError::InvalidValue {
			name: "fill",
			value: 12
		}))
	));
}

struct AlgName<D>(PhantomData<D>);

impl<D: AlgorithmName> fmt::Display for AlgName<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		D::write_alg_name(f)
	}
}

fn alg_name<D: AlgorithmName>() -> String {
	AlgName::<D>(PhantomData).to_string()
}

#[test]
fn test_algorithm_names() {
	assert_eq!(alg_name::<Tiger>(), "Tiger");
	assert_eq!(alg_name::<Tiger2>(), "Tiger2");
	assert_eq!(alg_name::<RadioGatun32>(), "RadioGatun[32]");
	assert_eq!(alg_name::<RadioGatun64>(), "RadioGatun[64]");
}
