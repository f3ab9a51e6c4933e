// Copyright 2025 Irreducible Inc.

//! The RadioGatun round function, written once for every word width.

use std::array;

use tigergatun_utils::Word;

use crate::permutation::{CryptographicPermutation, Permutation};

/// Number of words in the mill.
pub const MILL_WORDS: usize = 19;
/// Number of rows in the belt.
pub const BELT_ROWS: usize = 13;
/// Number of words in a belt row.
pub const BELT_WIDTH: usize = 3;
/// Number of words in the belt.
pub const BELT_WORDS: usize = BELT_ROWS * BELT_WIDTH;
/// Number of words injected by one absorption round.
pub const INPUT_WORDS: usize = BELT_WIDTH;

/// Mill position receiving the first input word.
const MILL_INPUT_OFFSET: usize = 16;
/// Mill position receiving the first word of the belt's last row.
const MILL_FEEDBACK_OFFSET: usize = 13;

/// π rotates mill word `i` right by `i(i+1)/2` bits (taken modulo the word width).
const PI_ROTATIONS: [u32; MILL_WORDS] = pi_rotations();

const fn pi_rotations() -> [u32; MILL_WORDS] {
	let mut rotations = [0; MILL_WORDS];
	let mut i = 0;
	while i < MILL_WORDS {
		rotations[i] = (i * (i + 1) / 2) as u32;
		i += 1;
	}
	rotations
}

/// The mill and belt of a RadioGatun computation.
///
/// The belt is stored row-major: word `j` of row `i` lives at `belt[i * BELT_WIDTH + j]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioGatunState<W: Word> {
	pub mill: [W; MILL_WORDS],
	pub belt: [W; BELT_WORDS],
}

impl<W: Word> Default for RadioGatunState<W> {
	fn default() -> Self {
		Self {
			mill: [W::ZERO; MILL_WORDS],
			belt: [W::ZERO; BELT_WORDS],
		}
	}
}

impl<W: Word> RadioGatunState<W> {
	/// XORs one round of input words into the first belt row and the top of the mill.
	#[inline]
	pub fn inject(&mut self, input: &[W; INPUT_WORDS]) {
		for (i, &word) in input.iter().enumerate() {
			self.belt[i] ^= word;
			self.mill[MILL_INPUT_OFFSET + i] ^= word;
		}
	}

	/// Advances the state by one blank round.
	pub fn round(&mut self) {
		let last_row = BELT_WORDS - BELT_WIDTH;
		let q: [W; BELT_WIDTH] = array::from_fn(|i| self.belt[last_row + i]);

		// Belt rotation: every row moves down by one, the last row wraps around to the front.
		self.belt.copy_within(0..last_row, BELT_WIDTH);
		self.belt[..BELT_WIDTH].copy_from_slice(&q);

		// Mill to belt feedforward.
		for i in 0..BELT_ROWS - 1 {
			self.belt[BELT_WIDTH * (i + 1) + i % BELT_WIDTH] ^= self.mill[i + 1];
		}

		mill(&mut self.mill);

		// Belt to mill feedback.
		for (i, &word) in q.iter().enumerate() {
			self.mill[MILL_FEEDBACK_OFFSET + i] ^= word;
		}
	}

	/// Injects `input` and then runs one round.
	#[inline]
	pub fn absorb(&mut self, input: &[W; INPUT_WORDS]) {
		self.inject(input);
		self.round();
	}
}

/// The nonlinear mill update: γ, π, θ and ι.
#[inline(always)]
fn mill<W: Word>(a: &mut [W; MILL_WORDS]) {
	let gamma: [W; MILL_WORDS] =
		array::from_fn(|i| a[i] ^ (a[(i + 1) % MILL_WORDS] | !a[(i + 2) % MILL_WORDS]));

	let pi: [W; MILL_WORDS] =
		array::from_fn(|i| gamma[(7 * i) % MILL_WORDS].rotate_right(PI_ROTATIONS[i] % W::BITS));

	for (i, word) in a.iter_mut().enumerate() {
		*word = pi[i] ^ pi[(i + 1) % MILL_WORDS] ^ pi[(i + 4) % MILL_WORDS];
	}

	a[0] ^= W::ONE;
}

/// Advances `state` by one round, injecting `input` first when present.
///
/// This is the pure form of [`RadioGatunState::absorb`] and [`RadioGatunState::round`].
pub fn round<W: Word>(
	mut state: RadioGatunState<W>,
	input: Option<&[W; INPUT_WORDS]>,
) -> RadioGatunState<W> {
	if let Some(input) = input {
		state.inject(input);
	}
	state.round();
	state
}

/// The blank RadioGatun round as a [`Permutation`] of the whole state.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadioGatunRound;

impl<W: Word> Permutation<RadioGatunState<W>> for RadioGatunRound {
	fn permute_mut(&self, input: &mut RadioGatunState<W>) {
		input.round();
	}
}

impl<W: Word> CryptographicPermutation<RadioGatunState<W>> for RadioGatunRound {}
