#![no_std]
#![deny(clippy::pedantic, warnings, missing_docs, unsafe_code)]
// Almost all of the 'allow' category...
#![deny(absolute_paths_not_starting_with_crate, dead_code)]
#![deny(elided_lifetimes_in_paths, explicit_outlives_requirements, keyword_idents)]
#![deny(let_underscore_drop, macro_use_extern_crate, meta_variable_misuse, missing_abi)]
#![deny(non_ascii_idents, rust_2021_incompatible_closure_captures)]
#![deny(rust_2021_incompatible_or_patterns, rust_2021_prefixes_incompatible_syntax)]
#![deny(rust_2021_prelude_collisions, single_use_lifetimes, trivial_casts)]
#![deny(trivial_numeric_casts, unreachable_pub, unsafe_op_in_unsafe_fn, unstable_features)]
#![deny(unused_extern_crates, unused_import_braces, unused_lifetimes, unused_macro_rules)]
#![deny(unused_qualifications, unused_results, variant_size_differences)]
//
#![doc = include_str!("../README.md")]


// Implements DSA signature generation over a message digest, FIPS 186 section 4.6.
// See <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf>

// Functionality map
//
// Signature generation: nonce rejection sampling, r, s, retry loop  --> dsa.rs
// Dss-Sig-Value DER encoding and decoding (RFC 3279 2.2.2)         --> encodings.rs
// Key, signature and configuration types                           --> types.rs
// Signer and SerDes traits                                         --> traits.rs
// Error type                                                       --> error.rs
// Secret scratch buffers, ensure! macro                            --> helpers.rs

// Note that the digest is consumed as a whole, without truncation to the bit length of q;
// callers wanting the FIPS 186 leftmost-bits rule must truncate before calling. Signing
// is not constant time: the big-integer arithmetic is variable time and the rejection
// loops depend on the drawn nonce.

extern crate alloc;

/// The `rand_core` types are re-exported so that users of fips186 do not
/// have to worry about using the exact correct version of `rand_core`.
pub use rand_core::{CryptoRng, Error as RngError, RngCore};

/// The big-integer type used for all key and signature components.
pub use num_bigint_dig::BigUint;

mod dsa;
mod encodings;
mod error;
mod helpers;
mod types;

/// All functionality is covered by traits, such that consumers can utilize trait objects as desired.
pub mod traits;

pub use crate::error::Error;
pub use crate::types::{DsaKey, KeyKind, NonceSampling, Signature, SigningConfig};

use crate::traits::{SerDes, Signer};
use alloc::vec::Vec;
use rand_core::CryptoRngCore;
#[cfg(feature = "default-rng")]
use rand_core::OsRng;


/// Upper bound (exclusive) on the byte length of the group order `q`. It sizes the secret
/// buffer the nonce is drawn into; 512 bytes covers 4096-bit groups.
pub const MAX_GROUP_BYTES: usize = 512;


/// Signs a digest, returning the raw `(r, s)` pair. This function utilizes the **default
/// OS** random number generator.
///
/// **Output**: the signature; `0 < r < q` and `0 < s < q`.
///
/// # Errors
/// Returns `NotPrivateKey` for a public key, `InvalidArgument` when the group order is
/// `MAX_GROUP_BYTES` bytes or longer, `OutOfMemory` when the secret buffer cannot be
/// allocated, and `Random` when the random number generator fails.
///
/// # Examples
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// # #[cfg(feature = "default-rng")] {
/// use fips186::{BigUint, DsaKey};
///
/// let sk = DsaKey::from_private_components(
///     BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32),
///     BigUint::from(13u32), BigUint::from(7u32),
/// );
/// let sig = fips186::sign_hash_raw(&[1, 2, 3, 4], &sk)?;
/// # }
/// # Ok(())}
/// ```
#[cfg(feature = "default-rng")]
pub fn sign_hash_raw(digest: &[u8], key: &DsaKey) -> Result<Signature, Error> {
    sign_hash_raw_with_rng(&mut OsRng, digest, key)
}


/// Signs a digest, returning the raw `(r, s)` pair. This function utilizes the **provided**
/// random number generator.
///
/// # Errors
/// As for [`sign_hash_raw`].
pub fn sign_hash_raw_with_rng(
    rng: &mut impl CryptoRngCore, digest: &[u8], key: &DsaKey,
) -> Result<Signature, Error> {
    dsa::sign_raw(rng, digest, key, &SigningConfig::default())
}


/// Signs a digest, returning the raw `(r, s)` pair, with explicit nonce sampling and
/// retry options.
///
/// # Errors
/// As for [`sign_hash_raw`]; additionally returns `RandomnessExhausted` when the configured
/// draw cap is reached.
pub fn sign_hash_raw_with_config(
    rng: &mut impl CryptoRngCore, digest: &[u8], key: &DsaKey, config: &SigningConfig,
) -> Result<Signature, Error> {
    dsa::sign_raw(rng, digest, key, config)
}


/// Signs a digest and writes the DER `SEQUENCE { r INTEGER, s INTEGER }` into `out`,
/// returning the number of bytes written. This function utilizes the **default OS**
/// random number generator.
///
/// # Errors
/// As for [`sign_hash_raw`]; additionally returns `BufferTooSmall { required, .. }` when
/// `out` cannot hold the encoding, in which case `out` is left untouched.
///
/// # Examples
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// # #[cfg(feature = "default-rng")] {
/// use fips186::{BigUint, DsaKey};
///
/// let sk = DsaKey::from_private_components(
///     BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32),
///     BigUint::from(13u32), BigUint::from(7u32),
/// );
/// let mut out = [0u8; 16];
/// let len = fips186::sign_hash(&[1, 2, 3, 4], &sk, &mut out)?;
/// assert_eq!(out[0], 0x30);
/// assert_eq!(usize::from(out[1]) + 2, len);
/// # }
/// # Ok(())}
/// ```
#[cfg(feature = "default-rng")]
pub fn sign_hash(digest: &[u8], key: &DsaKey, out: &mut [u8]) -> Result<usize, Error> {
    sign_hash_with_rng(&mut OsRng, digest, key, out)
}


/// Signs a digest and writes the DER signature into `out`. This function utilizes the
/// **provided** random number generator.
///
/// # Errors
/// As for [`sign_hash`].
pub fn sign_hash_with_rng(
    rng: &mut impl CryptoRngCore, digest: &[u8], key: &DsaKey, out: &mut [u8],
) -> Result<usize, Error> {
    sign_hash_with_config(rng, digest, key, out, &SigningConfig::default())
}


/// Signs a digest and writes the DER signature into `out`, with explicit nonce sampling
/// and retry options.
///
/// # Errors
/// As for [`sign_hash_raw_with_config`] and [`sign_hash`].
pub fn sign_hash_with_config(
    rng: &mut impl CryptoRngCore, digest: &[u8], key: &DsaKey, out: &mut [u8],
    config: &SigningConfig,
) -> Result<usize, Error> {
    let sig = dsa::sign_raw(rng, digest, key, config)?;
    encodings::sig_encode(&sig, out)
}


impl Signer for DsaKey {
    type Signature = Signature;

    fn try_sign_raw_with_rng(
        &self, rng: &mut impl CryptoRngCore, digest: &[u8],
    ) -> Result<Signature, Error> {
        sign_hash_raw_with_rng(rng, digest, self)
    }

    fn try_sign_with_rng(
        &self, rng: &mut impl CryptoRngCore, digest: &[u8], out: &mut [u8],
    ) -> Result<usize, Error> {
        sign_hash_with_rng(rng, digest, self, out)
    }
}


impl SerDes for Signature {
    fn encoded_len(&self) -> Result<usize, Error> { encodings::sig_encoded_len(self) }

    fn encode_into(&self, out: &mut [u8]) -> Result<usize, Error> {
        encodings::sig_encode(self, out)
    }

    fn to_der(&self) -> Result<Vec<u8>, Error> {
        let mut out = alloc::vec![0u8; encodings::sig_encoded_len(self)?];
        let len = encodings::sig_encode(self, &mut out)?;
        out.truncate(len);
        Ok(out)
    }

    fn try_from_der(bytes: &[u8]) -> Result<Self, Error> { encodings::sig_decode(bytes) }
}
