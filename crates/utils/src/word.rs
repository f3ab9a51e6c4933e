// Copyright 2025 Irreducible Inc.

//! Fixed-width unsigned machine words.
//!
//! Hash engines that are specified for several word widths are written once against [`Word`]
//! and instantiated for the concrete integer types.

use std::{
	fmt::Debug,
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

/// A fixed-width unsigned integer with wrapping arithmetic and little-endian byte access.
pub trait Word:
	Copy
	+ Default
	+ Debug
	+ Eq
	+ Send
	+ Sync
	+ BitAnd<Output = Self>
	+ BitAndAssign
	+ BitOr<Output = Self>
	+ BitOrAssign
	+ BitXor<Output = Self>
	+ BitXorAssign
	+ Not<Output = Self>
	+ 'static
{
	/// Width of the word in bits.
	const BITS: u32;
	/// Width of the word in bytes.
	const BYTES: usize;
	const ZERO: Self;
	const ONE: Self;

	fn rotate_left(self, n: u32) -> Self;
	fn rotate_right(self, n: u32) -> Self;
	fn wrapping_add(self, rhs: Self) -> Self;
	fn wrapping_sub(self, rhs: Self) -> Self;

	/// Decodes a word from exactly `Self::BYTES` little-endian bytes.
	///
	/// # Panics
	/// Panics if `bytes.len() != Self::BYTES`.
	fn read_le(bytes: &[u8]) -> Self;

	/// Encodes the word into exactly `Self::BYTES` bytes, least significant byte first.
	///
	/// # Panics
	/// Panics if `out.len() != Self::BYTES`.
	fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
	($($ty:ty),*) => {
		$(
			impl Word for $ty {
				const BITS: u32 = <$ty>::BITS;
				const BYTES: usize = std::mem::size_of::<$ty>();
				const ZERO: Self = 0;
				const ONE: Self = 1;

				#[inline(always)]
				fn rotate_left(self, n: u32) -> Self {
					<$ty>::rotate_left(self, n)
				}

				#[inline(always)]
				fn rotate_right(self, n: u32) -> Self {
					<$ty>::rotate_right(self, n)
				}

				#[inline(always)]
				fn wrapping_add(self, rhs: Self) -> Self {
					<$ty>::wrapping_add(self, rhs)
				}

				#[inline(always)]
				fn wrapping_sub(self, rhs: Self) -> Self {
					<$ty>::wrapping_sub(self, rhs)
				}

				#[inline(always)]
				fn read_le(bytes: &[u8]) -> Self {
					let bytes = bytes.try_into().expect("slice has the width of the word");
					<$ty>::from_le_bytes(bytes)
				}

				#[inline(always)]
				fn write_le(self, out: &mut [u8]) {
					out.copy_from_slice(&self.to_le_bytes());
				}
			}
		)*
	};
}

impl_word!(u32, u64);

/// Decodes consecutive little-endian words from `bytes` into `words`.
///
/// # Panics
/// Panics if `bytes.len() != words.len() * W::BYTES`.
#[inline]
pub fn read_words_le<W: Word>(bytes: &[u8], words: &mut [W]) {
	assert_eq!(bytes.len(), words.len() * W::BYTES);
	for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
		*word = W::read_le(chunk);
	}
}

/// Encodes `words` into consecutive little-endian byte groups of `out`.
///
/// # Panics
/// Panics if `out.len() != words.len() * W::BYTES`.
#[inline]
pub fn write_words_le<W: Word>(words: &[W], out: &mut [u8]) {
	assert_eq!(out.len(), words.len() * W::BYTES);
	for (word, chunk) in words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
		word.write_le(chunk);
	}
}
