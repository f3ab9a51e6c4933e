// Copyright 2025 Irreducible Inc.

use std::{fmt, marker::PhantomData};

use bytes::{Buf, BufMut};
use digest::{
	consts::{U24, U64},
	core_api::{AlgorithmName, BlockSizeUser},
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};
use static_assertions::const_assert_eq;
use tigergatun_utils::{
	bail,
	serialization::{assert_enough_data_for, assert_enough_space_for, Error as SerializationError},
	word::write_words_le,
	DeserializeBytes, SerializeBytes,
};

use super::compress::{compress_block, STATE_WORDS};

const BLOCK_LEN_U8: usize = 64;
/// Offset of the 64-bit message length inside the last padded block.
const LENGTH_OFFSET: usize = 56;

const_assert_eq!(LENGTH_OFFSET + 8, BLOCK_LEN_U8);

const INITIAL_STATE: [u64; STATE_WORDS] =
	[0x0123456789ABCDEF, 0xFEDCBA9876543210, 0xF096A5B4C3B2E187];

/// Distinguishes Tiger from Tiger2.
///
/// The two hash functions share the compression function and all buffering; they differ only in
/// the first padding byte appended at finalization.
pub trait TigerVariant: Clone + Send + Sync + 'static {
	/// First byte appended to the message by the padding.
	const PAD_FIRST_BYTE: u8;
	const NAME: &'static str;
	/// Leading byte of a serialized context.
	const SERIALIZATION_TAG: u8;
}

/// The original Tiger padding, starting with `0x01`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TigerV1;

impl TigerVariant for TigerV1 {
	const PAD_FIRST_BYTE: u8 = 0x01;
	const NAME: &'static str = "Tiger";
	const SERIALIZATION_TAG: u8 = 1;
}

/// The MD4-style padding of Tiger2, starting with `0x80`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TigerV2;

impl TigerVariant for TigerV2 {
	const PAD_FIRST_BYTE: u8 = 0x80;
	const NAME: &'static str = "Tiger2";
	const SERIALIZATION_TAG: u8 = 2;
}

/// Streaming Tiger hasher, generic over the padding variant.
///
/// The whole computation state lives inline, so cloning the hasher forks the computation: the
/// clone and the original can be fed different suffixes independently.
#[derive(Clone)]
pub struct TigerDigest<V: TigerVariant> {
	pending_block: [u8; BLOCK_LEN_U8],
	/// Number of valid bytes in `pending_block`, always less than the block size between calls.
	fill: usize,
	chaining_value: [u64; STATE_WORDS],
	/// Bytes absorbed so far, modulo 2^64.
	total_length: u64,
	_variant: PhantomData<V>,
}

/// Tiger hasher state.
pub type Tiger = TigerDigest<TigerV1>;
/// Tiger2 hasher state.
pub type Tiger2 = TigerDigest<TigerV2>;

impl<V: TigerVariant> TigerDigest<V> {
	/// Digest size in bits.
	pub const OUTPUT_BITS: usize = 192;

	/// Returns the chaining value after the fully processed blocks.
	pub fn chaining_value(&self) -> [u64; STATE_WORDS] {
		self.chaining_value
	}

	/// Returns the number of bytes absorbed so far, modulo 2^64.
	pub fn total_length(&self) -> u64 {
		self.total_length
	}

	/// Reinterprets the running computation as the other Tiger variant.
	///
	/// Nothing but the padding depends on the variant, so this is exact at any point of the
	/// stream.
	pub fn into_variant<W: TigerVariant>(self) -> TigerDigest<W> {
		TigerDigest {
			pending_block: self.pending_block,
			fill: self.fill,
			chaining_value: self.chaining_value,
			total_length: self.total_length,
			_variant: PhantomData,
		}
	}

	fn process_block(&mut self, block: &[u8; BLOCK_LEN_U8]) {
		self.chaining_value = compress_block(self.chaining_value, block);
	}

	fn finalize_core(&mut self, out: &mut Output<Self>) {
		let bit_length = self.total_length << 3;

		let mut block = self.pending_block;
		block[self.fill] = V::PAD_FIRST_BYTE;
		block[self.fill + 1..].fill(0);
		if self.fill >= LENGTH_OFFSET {
			self.process_block(&block);
			block = [0; BLOCK_LEN_U8];
		}
		block[LENGTH_OFFSET..].copy_from_slice(&bit_length.to_le_bytes());
		self.process_block(&block);

		write_words_le(&self.chaining_value, out);
	}
}

impl<V: TigerVariant> Default for TigerDigest<V> {
	fn default() -> Self {
		Self {
			pending_block: [0; BLOCK_LEN_U8],
			fill: 0,
			chaining_value: INITIAL_STATE,
			total_length: 0,
			_variant: PhantomData,
		}
	}
}

impl<V: TigerVariant> HashMarker for TigerDigest<V> {}

impl<V: TigerVariant> Update for TigerDigest<V> {
	fn update(&mut self, mut data: &[u8]) {
		self.total_length = self.total_length.wrapping_add(data.len() as u64);

		if self.fill != 0 {
			let to_copy = std::cmp::min(data.len(), BLOCK_LEN_U8 - self.fill);
			self.pending_block[self.fill..self.fill + to_copy].copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.fill += to_copy;

			if self.fill == BLOCK_LEN_U8 {
				let block = self.pending_block;
				self.process_block(&block);
				self.fill = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_LEN_U8);
		for chunk in &mut chunks {
			self.process_block(chunk.try_into().expect("chunk is 64 bytes"));
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.pending_block[..remaining.len()].copy_from_slice(remaining);
			self.fill = remaining.len();
		}
	}
}

impl<V: TigerVariant> OutputSizeUser for TigerDigest<V> {
	type OutputSize = U24;
}

impl<V: TigerVariant> BlockSizeUser for TigerDigest<V> {
	type BlockSize = U64;
}

impl<V: TigerVariant> FixedOutput for TigerDigest<V> {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		self.finalize_core(out);
	}
}

impl<V: TigerVariant> Reset for TigerDigest<V> {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl<V: TigerVariant> FixedOutputReset for TigerDigest<V> {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		self.finalize_core(out);
		Reset::reset(self);
	}
}

impl<V: TigerVariant> AlgorithmName for TigerDigest<V> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(V::NAME)
	}
}

impl<V: TigerVariant> fmt::Debug for TigerDigest<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}Digest {{ ... }}", V::NAME)
	}
}

/// Layout: tag, chaining value, total length, then the buffered tail of the stream. The tail
/// length is implied by the total length.
impl<V: TigerVariant> SerializeBytes for TigerDigest<V> {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(&write_buf, 1 + 8 * (STATE_WORDS + 1) + self.fill)?;

		write_buf.put_u8(V::SERIALIZATION_TAG);
		for word in self.chaining_value {
			write_buf.put_u64_le(word);
		}
		write_buf.put_u64_le(self.total_length);
		write_buf.put_slice(&self.pending_block[..self.fill]);
		Ok(())
	}
}

impl<V: TigerVariant> DeserializeBytes for TigerDigest<V> {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError> {
		let tag = u8::deserialize(&mut read_buf)?;
		if tag != V::SERIALIZATION_TAG {
			tracing::debug!(
				tag,
				expected = V::SERIALIZATION_TAG,
				"rejecting {} context",
				V::NAME
			);
			bail!(SerializationError::UnknownEnumVariant {
				name: V::NAME,
				index: tag,
			});
		}

		let mut hasher = Self::default();
		for word in hasher.chaining_value.iter_mut() {
			*word = u64::deserialize(&mut read_buf)?;
		}
		hasher.total_length = u64::deserialize(&mut read_buf)?;
		hasher.fill = (hasher.total_length % BLOCK_LEN_U8 as u64) as usize;

		assert_enough_data_for(&read_buf, hasher.fill)?;
		read_buf.copy_to_slice(&mut hasher.pending_block[..hasher.fill]);
		Ok(hasher)
	}
}
