// Copyright 2025 Irreducible Inc.

//! The Tiger compression function.

use tigergatun_utils::word::read_words_le;

use super::table::{T1, T2, T3, T4};
use crate::compression::CompressionFunction;

/// Number of 64-bit message words in one block.
pub const BLOCK_WORDS: usize = 8;
/// Number of 64-bit words in the chaining value.
pub const STATE_WORDS: usize = 3;

pub(super) type SBoxes = [[u64; 256]; 4];

static SBOXES: SBoxes = [T1, T2, T3, T4];

/// Applies the Tiger compression function to one message block.
///
/// `block` holds the eight message words after little-endian decoding. The function is pure:
/// equal inputs always produce equal outputs.
#[inline]
pub fn compress(state: [u64; STATE_WORDS], block: &[u64; BLOCK_WORDS]) -> [u64; STATE_WORDS] {
	compress_with_sboxes(&SBOXES, state, block)
}

/// Same as [`compress`], decoding the message words from a 64-byte block first.
#[inline]
pub fn compress_block(state: [u64; STATE_WORDS], block: &[u8; 64]) -> [u64; STATE_WORDS] {
	let mut words = [0u64; BLOCK_WORDS];
	read_words_le(block, &mut words);
	compress(state, &words)
}

#[inline(always)]
pub(super) fn compress_with_sboxes(
	t: &SBoxes,
	state: [u64; STATE_WORDS],
	block: &[u64; BLOCK_WORDS],
) -> [u64; STATE_WORDS] {
	let [mut a, mut b, mut c] = state;
	let mut x = *block;

	pass(t, &mut a, &mut b, &mut c, &x, 5);
	key_schedule(&mut x);
	pass(t, &mut c, &mut a, &mut b, &x, 7);
	key_schedule(&mut x);
	pass(t, &mut b, &mut c, &mut a, &x, 9);

	[a ^ state[0], b.wrapping_sub(state[1]), c.wrapping_add(state[2])]
}

#[inline(always)]
fn round(t: &SBoxes, a: &mut u64, b: &mut u64, c: &mut u64, x: u64, mul: u64) {
	*c ^= x;
	let cb = c.to_le_bytes();
	*a = a.wrapping_sub(
		t[0][cb[0] as usize] ^ t[1][cb[2] as usize] ^ t[2][cb[4] as usize] ^ t[3][cb[6] as usize],
	);
	*b = b.wrapping_add(
		t[3][cb[1] as usize] ^ t[2][cb[3] as usize] ^ t[1][cb[5] as usize] ^ t[0][cb[7] as usize],
	);
	*b = b.wrapping_mul(mul);
}

#[inline(always)]
fn pass(
	t: &SBoxes,
	a: &mut u64,
	b: &mut u64,
	c: &mut u64,
	x: &[u64; BLOCK_WORDS],
	mul: u64,
) {
	round(t, a, b, c, x[0], mul);
	round(t, b, c, a, x[1], mul);
	round(t, c, a, b, x[2], mul);
	round(t, a, b, c, x[3], mul);
	round(t, b, c, a, x[4], mul);
	round(t, c, a, b, x[5], mul);
	round(t, a, b, c, x[6], mul);
	round(t, b, c, a, x[7], mul);
}

#[inline(always)]
fn key_schedule(x: &mut [u64; BLOCK_WORDS]) {
	x[0] = x[0].wrapping_sub(x[7] ^ 0xA5A5A5A5A5A5A5A5);
	x[1] ^= x[0];
	x[2] = x[2].wrapping_add(x[1]);
	x[3] = x[3].wrapping_sub(x[2] ^ (!x[1] << 19));
	x[4] ^= x[3];
	x[5] = x[5].wrapping_add(x[4]);
	x[6] = x[6].wrapping_sub(x[5] ^ (!x[4] >> 23));
	x[7] ^= x[6];
	x[0] = x[0].wrapping_add(x[7]);
	x[1] = x[1].wrapping_sub(x[0] ^ (!x[7] << 19));
	x[2] ^= x[1];
	x[3] = x[3].wrapping_add(x[2]);
	x[4] = x[4].wrapping_sub(x[3] ^ (!x[2] >> 23));
	x[5] ^= x[4];
	x[6] = x[6].wrapping_add(x[5]);
	x[7] = x[7].wrapping_sub(x[6] ^ 0x0123456789ABCDEF);
}

/// The Tiger compression function as a [`CompressionFunction`] object.
#[derive(Debug, Default, Clone, Copy)]
pub struct TigerCompression;

impl CompressionFunction<[u64; STATE_WORDS], [u64; BLOCK_WORDS]> for TigerCompression {
	fn compress(&self, state: [u64; STATE_WORDS], block: &[u64; BLOCK_WORDS]) -> [u64; STATE_WORDS] {
		compress(state, block)
	}
}
