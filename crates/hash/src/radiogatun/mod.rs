// Copyright 2025 Irreducible Inc.

//! [RadioGatun](https://radiogatun.noekeon.org/) with 32-bit and 64-bit words.
//!
//! Both instances produce 256-bit digests. The round function and the streaming hasher are
//! generic over [`RadioGatunWord`]; the two widths differ only in word size.

mod digest;
mod permutation;

pub use self::digest::*;
pub use permutation::*;
