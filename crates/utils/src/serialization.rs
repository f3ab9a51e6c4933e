// Copyright 2024-2025 Irreducible Inc.

use bytes::{Buf, BufMut};

use crate::word::Word;

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("Write buffer is full")]
	WriteBufferFull,
	#[error("Not enough data in read buffer to deserialize")]
	NotEnoughBytes,
	#[error("Unknown enum variant index {name}::{index}")]
	UnknownEnumVariant { name: &'static str, index: u8 },
	#[error("Invalid value {value} for {name}")]
	InvalidValue { name: &'static str, value: u64 },
}

/// Represents type that can be serialized to a byte buffer.
pub trait SerializeBytes {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), Error>;
}

/// Represents type that can be deserialized from a byte buffer.
pub trait DeserializeBytes {
	fn deserialize(read_buf: impl Buf) -> Result<Self, Error>
	where
		Self: Sized;
}

/// Fails with [`Error::NotEnoughBytes`] unless `read_buf` holds at least `len` more bytes.
pub fn assert_enough_data_for(read_buf: &impl Buf, len: usize) -> Result<(), Error> {
	crate::ensure!(read_buf.remaining() >= len, Error::NotEnoughBytes);
	Ok(())
}

/// Fails with [`Error::WriteBufferFull`] unless `write_buf` has room for `len` more bytes.
pub fn assert_enough_space_for(write_buf: &impl BufMut, len: usize) -> Result<(), Error> {
	crate::ensure!(write_buf.remaining_mut() >= len, Error::WriteBufferFull);
	Ok(())
}

impl SerializeBytes for u8 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), Error> {
		assert_enough_space_for(&write_buf, 1)?;
		write_buf.put_u8(*self);
		Ok(())
	}
}

impl DeserializeBytes for u8 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, Error> {
		assert_enough_data_for(&read_buf, 1)?;
		Ok(read_buf.get_u8())
	}
}

impl SerializeBytes for u32 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), Error> {
		assert_enough_space_for(&write_buf, 4)?;
		write_buf.put_u32_le(*self);
		Ok(())
	}
}

impl DeserializeBytes for u32 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, Error> {
		assert_enough_data_for(&read_buf, 4)?;
		Ok(read_buf.get_u32_le())
	}
}

impl SerializeBytes for u64 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), Error> {
		assert_enough_space_for(&write_buf, 8)?;
		write_buf.put_u64_le(*self);
		Ok(())
	}
}

impl DeserializeBytes for u64 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, Error> {
		assert_enough_data_for(&read_buf, 8)?;
		Ok(read_buf.get_u64_le())
	}
}

/// Serializes a slice of words back to back, each in little-endian order.
pub fn serialize_words<W: Word>(words: &[W], mut write_buf: impl BufMut) -> Result<(), Error> {
	assert_enough_space_for(&write_buf, words.len() * W::BYTES)?;
	let mut bytes = [0u8; 8];
	for word in words {
		word.write_le(&mut bytes[..W::BYTES]);
		write_buf.put_slice(&bytes[..W::BYTES]);
	}
	Ok(())
}

/// Fills `words` from little-endian encoded words in `read_buf`.
pub fn deserialize_words<W: Word>(words: &mut [W], mut read_buf: impl Buf) -> Result<(), Error> {
	assert_enough_data_for(&read_buf, words.len() * W::BYTES)?;
	let mut bytes = [0u8; 8];
	for word in words {
		read_buf.copy_to_slice(&mut bytes[..W::BYTES]);
		*word = W::read_le(&bytes[..W::BYTES]);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_words_are_little_endian() {
		let mut buf = Vec::new();
		serialize_words(&[0x04030201u32, 0x08070605], &mut buf).unwrap();
		assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);

		let mut words = [0u64; 1];
		deserialize_words(&mut words, buf.as_slice()).unwrap();
		assert_eq!(words, [0x0807060504030201]);
	}

	#[test]
	fn test_short_read_buffer() {
		let buf = [1u8, 2, 3];
		assert_eq!(u32::deserialize(buf.as_slice()), Err(Error::NotEnoughBytes));

		let mut words = [0u32; 2];
		assert_eq!(deserialize_words(&mut words, &buf[..]), Err(Error::NotEnoughBytes));
	}

	#[test]
	fn test_full_write_buffer() {
		let mut storage = [0u8; 7];
		assert_eq!(0u64.serialize(storage.as_mut_slice()), Err(Error::WriteBufferFull));
	}
}
