use crate::error::Error;
use alloc::vec::Vec;
use rand_core::CryptoRngCore;
#[cfg(feature = "default-rng")]
use rand_core::OsRng;


/// The Signer trait is implemented for the [`crate::DsaKey`] struct. Every method signs a
/// caller-computed digest; hashing the message is left to the caller.
pub trait Signer {
    /// The raw `(r, s)` signature type
    type Signature;

    /// Attempt to sign the given digest, returning the raw `(r, s)` pair on success, or an
    /// error if something went wrong. This function utilizes the default OS RNG.
    ///
    /// # Errors
    /// Returns an error for a public key or an unsupported group order, when the random
    /// number generator fails, or on allocation failure; propagates internal errors.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use fips186::traits::Signer;
    /// use fips186::{BigUint, DsaKey};
    ///
    /// // Toy group: p = 23, q = 11, g = 2; private x = 7, public y = 2^7 mod 23 = 13
    /// let sk = DsaKey::from_private_components(
    ///     BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32),
    ///     BigUint::from(13u32), BigUint::from(7u32),
    /// );
    /// let digest = [0x5au8; 20];
    /// let sig = sk.try_sign_raw(&digest)?;
    /// assert!(sig.r() < sk.q() && sig.s() < sk.q());
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_sign_raw(&self, digest: &[u8]) -> Result<Self::Signature, Error> {
        self.try_sign_raw_with_rng(&mut OsRng, digest)
    }

    /// Attempt to sign the given digest, returning the raw `(r, s)` pair on success, or an
    /// error if something went wrong. This function utilizes a supplied RNG.
    ///
    /// # Errors
    /// Returns an error for a public key or an unsupported group order, when the random
    /// number generator fails, or on allocation failure; propagates internal errors.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use fips186::traits::Signer;
    /// use fips186::{BigUint, DsaKey};
    /// use rand_chacha::rand_core::SeedableRng;
    ///
    /// let sk = DsaKey::from_private_components(
    ///     BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32),
    ///     BigUint::from(13u32), BigUint::from(7u32),
    /// );
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(123);
    /// let sig = sk.try_sign_raw_with_rng(&mut rng, &[0x5au8; 20])?;
    /// # Ok(())}
    /// ```
    fn try_sign_raw_with_rng(
        &self, rng: &mut impl CryptoRngCore, digest: &[u8],
    ) -> Result<Self::Signature, Error>;

    /// Attempt to sign the given digest and write the DER signature into `out`, returning
    /// the number of bytes written. This function utilizes the default OS RNG.
    ///
    /// # Errors
    /// As for [`Signer::try_sign_raw`]; additionally returns `BufferTooSmall` (carrying the
    /// required size) when `out` cannot hold the encoding.
    #[cfg(feature = "default-rng")]
    fn try_sign(&self, digest: &[u8], out: &mut [u8]) -> Result<usize, Error> {
        self.try_sign_with_rng(&mut OsRng, digest, out)
    }

    /// Attempt to sign the given digest and write the DER signature into `out`, returning
    /// the number of bytes written. This function utilizes a supplied RNG.
    ///
    /// # Errors
    /// As for [`Signer::try_sign_raw_with_rng`]; additionally returns `BufferTooSmall`
    /// (carrying the required size) when `out` cannot hold the encoding.
    fn try_sign_with_rng(
        &self, rng: &mut impl CryptoRngCore, digest: &[u8], out: &mut [u8],
    ) -> Result<usize, Error>;
}


/// The `SerDes` trait provides for validated serialization and deserialization of
/// signatures in their DER form.
pub trait SerDes {
    /// Exact length of the serialized form.
    ///
    /// # Errors
    /// Propagates encoder errors.
    fn encoded_len(&self) -> Result<usize, Error>;

    /// Serializes into the front of `out`, returning the number of bytes written.
    ///
    /// # Errors
    /// Returns `BufferTooSmall` when `out` is too short; nothing is written in that case.
    fn encode_into(&self, out: &mut [u8]) -> Result<usize, Error>;

    /// Serializes into a freshly allocated vector.
    ///
    /// # Errors
    /// Propagates encoder errors.
    fn to_der(&self) -> Result<Vec<u8>, Error>;

    /// Deserializes and validates.
    ///
    /// # Errors
    /// Returns an error on malformed input.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use fips186::traits::SerDes;
    /// use fips186::Signature;
    ///
    /// let sig = Signature::try_from_der(&[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02])?;
    /// assert_eq!(sig.to_der()?, [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02]);
    /// # Ok(())}
    /// ```
    fn try_from_der(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;
}
