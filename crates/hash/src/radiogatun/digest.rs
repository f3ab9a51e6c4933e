// Copyright 2025 Irreducible Inc.

use std::fmt;

use bytes::{Buf, BufMut};
use digest::{
	consts::{U12, U24, U32},
	core_api::{AlgorithmName, BlockSizeUser},
	generic_array::{ArrayLength, GenericArray},
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};
use tigergatun_utils::{
	bail,
	checked_arithmetics::checked_int_div,
	serialization::{
		assert_enough_data_for, assert_enough_space_for, deserialize_words, serialize_words,
		Error as SerializationError,
	},
	word::{read_words_le, write_words_le},
	DeserializeBytes, SerializeBytes, Word,
};

use super::permutation::{RadioGatunRound, RadioGatunState, BELT_WORDS, INPUT_WORDS, MILL_WORDS};
use crate::permutation::Permutation;

/// Rounds run after the last input round before any output is extracted.
pub const BLANK_ROUNDS: usize = 16;

const OUTPUT_LEN_U8: usize = 32;
/// Each output round yields `mill[1]` and `mill[2]`.
const OUTPUT_WORDS_PER_ROUND: usize = 2;
const PADDING_BYTE: u8 = 0x01;

/// A word width RadioGatun is defined for.
pub trait RadioGatunWord: Word {
	/// Bytes absorbed per round, i.e. [`INPUT_WORDS`] words.
	type BlockSize: ArrayLength<u8> + 'static;
	const NAME: &'static str;
	/// Leading byte of a serialized context.
	const SERIALIZATION_TAG: u8;
}

impl RadioGatunWord for u32 {
	type BlockSize = U12;
	const NAME: &'static str = "RadioGatun[32]";
	const SERIALIZATION_TAG: u8 = 32;
}

impl RadioGatunWord for u64 {
	type BlockSize = U24;
	const NAME: &'static str = "RadioGatun[64]";
	const SERIALIZATION_TAG: u8 = 64;
}

/// Streaming RadioGatun hasher over words of type `W`.
///
/// Cloning the hasher forks the computation.
#[derive(Clone)]
pub struct RadioGatunDigest<W: RadioGatunWord> {
	pending_block: GenericArray<u8, W::BlockSize>,
	fill: usize,
	state: RadioGatunState<W>,
}

/// RadioGatun[32] hasher state.
pub type RadioGatun32 = RadioGatunDigest<u32>;
/// RadioGatun[64] hasher state.
pub type RadioGatun64 = RadioGatunDigest<u64>;

impl<W: RadioGatunWord> RadioGatunDigest<W> {
	/// Digest size in bits.
	pub const OUTPUT_BITS: usize = 8 * OUTPUT_LEN_U8;

	const BLOCK_LEN_U8: usize = INPUT_WORDS * W::BYTES;
	const OUTPUT_ROUNDS: usize = checked_int_div(OUTPUT_LEN_U8, OUTPUT_WORDS_PER_ROUND * W::BYTES);

	/// Returns the mill and belt after the fully absorbed rounds.
	pub fn state(&self) -> &RadioGatunState<W> {
		&self.state
	}

	fn absorb_block(state: &mut RadioGatunState<W>, block: &[u8]) {
		let mut words = [W::ZERO; INPUT_WORDS];
		read_words_le(block, &mut words);
		state.absorb(&words);
	}

	fn finalize_core(&mut self, out: &mut Output<Self>) {
		let mut block = self.pending_block.clone();
		block[self.fill] = PADDING_BYTE;
		block[self.fill + 1..].fill(0);
		Self::absorb_block(&mut self.state, &block);

		RadioGatunRound.permute_mut_n(&mut self.state, BLANK_ROUNDS);

		let chunk_len = OUTPUT_WORDS_PER_ROUND * W::BYTES;
		for round in 0..Self::OUTPUT_ROUNDS {
			self.state.round();
			write_words_le(
				&self.state.mill[1..1 + OUTPUT_WORDS_PER_ROUND],
				&mut out[round * chunk_len..(round + 1) * chunk_len],
			);
		}
	}
}

impl<W: RadioGatunWord> Default for RadioGatunDigest<W> {
	fn default() -> Self {
		Self {
			pending_block: GenericArray::default(),
			fill: 0,
			state: RadioGatunState::default(),
		}
	}
}

impl<W: RadioGatunWord> HashMarker for RadioGatunDigest<W> {}

impl<W: RadioGatunWord> Update for RadioGatunDigest<W> {
	fn update(&mut self, mut data: &[u8]) {
		if self.fill != 0 {
			let to_copy = std::cmp::min(data.len(), Self::BLOCK_LEN_U8 - self.fill);
			self.pending_block[self.fill..self.fill + to_copy].copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.fill += to_copy;

			if self.fill == Self::BLOCK_LEN_U8 {
				Self::absorb_block(&mut self.state, &self.pending_block);
				self.fill = 0;
			}
		}

		let mut chunks = data.chunks_exact(Self::BLOCK_LEN_U8);
		for chunk in &mut chunks {
			Self::absorb_block(&mut self.state, chunk);
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.pending_block[..remaining.len()].copy_from_slice(remaining);
			self.fill = remaining.len();
		}
	}
}

impl<W: RadioGatunWord> OutputSizeUser for RadioGatunDigest<W> {
	type OutputSize = U32;
}

impl<W: RadioGatunWord> BlockSizeUser for RadioGatunDigest<W> {
	type BlockSize = W::BlockSize;
}

impl<W: RadioGatunWord> FixedOutput for RadioGatunDigest<W> {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		self.finalize_core(out);
	}
}

impl<W: RadioGatunWord> Reset for RadioGatunDigest<W> {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl<W: RadioGatunWord> FixedOutputReset for RadioGatunDigest<W> {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		self.finalize_core(out);
		Reset::reset(self);
	}
}

impl<W: RadioGatunWord> AlgorithmName for RadioGatunDigest<W> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(W::NAME)
	}
}

impl<W: RadioGatunWord> fmt::Debug for RadioGatunDigest<W> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {{ ... }}", W::NAME)
	}
}

/// Layout: tag, mill, belt, fill, then the buffered tail of the stream. Words are little-endian
/// whatever the host byte order.
impl<W: RadioGatunWord> SerializeBytes for RadioGatunDigest<W> {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), SerializationError> {
		assert_enough_space_for(
			&write_buf,
			1 + (MILL_WORDS + BELT_WORDS) * W::BYTES + 1 + self.fill,
		)?;

		write_buf.put_u8(W::SERIALIZATION_TAG);
		serialize_words(&self.state.mill, &mut write_buf)?;
		serialize_words(&self.state.belt, &mut write_buf)?;
		write_buf.put_u8(self.fill as u8);
		write_buf.put_slice(&self.pending_block[..self.fill]);
		Ok(())
	}
}

impl<W: RadioGatunWord> DeserializeBytes for RadioGatunDigest<W> {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, SerializationError> {
		let tag = u8::deserialize(&mut read_buf)?;
		if tag != W::SERIALIZATION_TAG {
			tracing::debug!(
				tag,
				expected = W::SERIALIZATION_TAG,
				"rejecting {} context",
				W::NAME
			);
			bail!(SerializationError::UnknownEnumVariant {
				name: W::NAME,
				index: tag,
			});
		}

		let mut hasher = Self::default();
		deserialize_words(&mut hasher.state.mill, &mut read_buf)?;
		deserialize_words(&mut hasher.state.belt, &mut read_buf)?;

		let fill = u8::deserialize(&mut read_buf)? as usize;
		if fill >= Self::BLOCK_LEN_U8 {
			tracing::debug!(fill, "rejecting {} context", W::NAME);
			bail!(SerializationError::InvalidValue {
				name: "fill",
				value: fill as u64,
			});
		}

		assert_enough_data_for(&read_buf, fill)?;
		read_buf.copy_to_slice(&mut hasher.pending_block[..fill]);
		hasher.fill = fill;
		Ok(hasher)
	}
}
