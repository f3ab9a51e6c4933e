// Copyright 2023 Ulvetanna Inc.

//! Streaming Tiger, Tiger2, RadioGatun[32] and RadioGatun[64].
//!
//! The hashers implement the [`digest`] traits, so they can be used through [`Digest`] and
//! [`digest::DynDigest`] like any other RustCrypto hash. The compression function of Tiger and
//! the round function of RadioGatun are exposed on their own as pure transforms.

pub mod compression;
pub mod hasher;
pub mod permutation;
pub mod radiogatun;
pub mod serialization;
pub mod tiger;

pub use compression::*;
pub use digest::{self, Digest};
pub use hasher::*;
pub use permutation::*;
pub use radiogatun::{RadioGatun32, RadioGatun64};
pub use serialization::*;
pub use tiger::{Tiger, Tiger2};
