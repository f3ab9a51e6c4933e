// Copyright 2024 Irreducible Inc.

pub mod checked_arithmetics;
pub mod env;
pub mod error_utils;
pub mod serialization;
pub mod tracing;
pub mod word;

pub use serialization::{DeserializeBytes, SerializeBytes};
pub use word::Word;
