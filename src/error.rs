//! Error type shared by signing and signature (de)serialization.

use thiserror::Error;


/// Errors produced while signing a digest or (de)serializing a signature.
///
/// Errors from the random source and the DER encoder are carried verbatim. The retry
/// conditions of the signing loop (`k <= 1`, `gcd(k, q) != 1`, `r == 0`, `s == 0`) are not
/// errors and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument is outside what this crate supports, e.g. an oversized group order.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The key handed to a signing function holds only the public component.
    #[error("key is not a private key")]
    NotPrivateKey,

    /// Allocation of temporary secret storage failed.
    #[error("out of memory")]
    OutOfMemory,

    /// The big-integer engine could not complete an operation.
    #[error("arithmetic failure: {0}")]
    Arithmetic(&'static str),

    /// The random number generator reported a failure.
    #[error("random number generator failed: {0}")]
    Random(rand_core::Error),

    /// The output buffer cannot hold the encoded signature; `required` is the exact size.
    #[error("output buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall {
        /// Encoded length of the signature.
        required: usize,
        /// Capacity the caller supplied.
        available: usize,
    },

    /// The configured nonce-draw cap was reached before a valid signature was found.
    #[error("retry limit reached while sampling the nonce")]
    RandomnessExhausted,

    /// The DER encoder or decoder rejected its input.
    #[error("DER error: {0}")]
    Der(der::Error),

    /// A decoded signature is structurally valid DER but not a usable `(r, s)` pair.
    #[error("malformed signature: {0}")]
    MalformedSignature(&'static str),
}


impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self { Error::Der(err) }
}
