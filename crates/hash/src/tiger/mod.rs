// Copyright 2025 Irreducible Inc.

//! [Tiger](https://www.cs.technion.ac.il/~biham/Reports/Tiger/) and Tiger2.
//!
//! Both produce 192-bit digests from 512-bit blocks and differ only in the first padding byte.

mod compress;
mod digest;
mod table;

pub use compress::{compress, compress_block, TigerCompression, BLOCK_WORDS, STATE_WORDS};
pub use self::digest::*;
