use crate::helpers::byte_length;
use core::fmt;
use num_bigint_dig::BigUint;
use zeroize::Zeroize;


/// Distinguishes a full private key from its public half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Holds the private exponent `x`; may sign.
    Private,
    /// Holds only the public value `y`.
    Public,
}


/// A DSA key over the domain parameters `(p, q, g)`.
///
/// The key is assumed to have been validated by whoever built it; signing only checks
/// the [`KeyKind`] and that the group order fits within [`crate::MAX_GROUP_BYTES`].
/// The private exponent is wiped when the key is dropped.
#[derive(Clone)]
pub struct DsaKey {
    pub(crate) kind: KeyKind,
    pub(crate) qord: usize,
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) g: BigUint,
    pub(crate) y: BigUint,
    pub(crate) x: BigUint,
}


impl DsaKey {
    /// Assembles a private key from already validated components, where `y = g^x mod p`
    /// and `0 < x < q`.
    #[must_use]
    pub fn from_private_components(
        p: BigUint, q: BigUint, g: BigUint, y: BigUint, x: BigUint,
    ) -> Self {
        let qord = byte_length(&q);
        Self { kind: KeyKind::Private, qord, p, q, g, y, x }
    }

    /// Assembles a public key from already validated components.
    #[must_use]
    pub fn from_public_components(p: BigUint, q: BigUint, g: BigUint, y: BigUint) -> Self {
        let qord = byte_length(&q);
        Self { kind: KeyKind::Public, qord, p, q, g, y, x: BigUint::default() }
    }

    /// Returns the public half of this key.
    #[must_use]
    pub fn to_public(&self) -> Self {
        Self::from_public_components(self.p.clone(), self.q.clone(), self.g.clone(), self.y.clone())
    }

    /// Whether this key can sign.
    #[must_use]
    pub fn kind(&self) -> KeyKind { self.kind }

    /// Byte length of the group order `q`.
    #[must_use]
    pub fn group_order_bytes(&self) -> usize { self.qord }

    /// The prime modulus.
    #[must_use]
    pub fn p(&self) -> &BigUint { &self.p }

    /// The prime order of the subgroup generated by `g`.
    #[must_use]
    pub fn q(&self) -> &BigUint { &self.q }

    /// The subgroup generator.
    #[must_use]
    pub fn g(&self) -> &BigUint { &self.g }

    /// The public value `g^x mod p`.
    #[must_use]
    pub fn y(&self) -> &BigUint { &self.y }
}


impl Drop for DsaKey {
    fn drop(&mut self) { self.x.zeroize(); }
}


// The private exponent is never printed
impl fmt::Debug for DsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DsaKey")
            .field("kind", &self.kind)
            .field("qord", &self.qord)
            .field("p", &self.p)
            .field("q", &self.q)
            .field("g", &self.g)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}


/// A DSA signature `(r, s)`, both components reduced modulo `q` and non-zero.
///
/// Implements the [`crate::traits::SerDes`] trait for the DER form
/// `SEQUENCE { r INTEGER, s INTEGER }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub(crate) r: BigUint,
    pub(crate) s: BigUint,
}


impl Signature {
    /// Wraps a pair of integers, e.g. when re-embedding components taken from another
    /// envelope format. No range check against any `q` is possible here.
    #[must_use]
    pub fn from_components(r: BigUint, s: BigUint) -> Self { Self { r, s } }

    /// The `r` component.
    #[must_use]
    pub fn r(&self) -> &BigUint { &self.r }

    /// The `s` component.
    #[must_use]
    pub fn s(&self) -> &BigUint { &self.s }

    /// Splits the signature into `(r, s)`.
    #[must_use]
    pub fn into_components(self) -> (BigUint, BigUint) { (self.r, self.s) }
}


/// How the nonce `k` is drawn from the random source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NonceSampling {
    /// Draw `qord` random bytes and accept any `k > 1` with `gcd(k, q) = 1`, including
    /// values at or above `q`. Matches long-standing deployed behaviour.
    #[default]
    ByteString,
    /// As `ByteString`, but also reject `k >= q`, so `k` is uniform on `[2, q - 1]`.
    Strict,
}


/// Runtime options for the signing loop. The default reproduces the unbounded,
/// byte-string sampling behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SigningConfig {
    pub(crate) nonce_sampling: NonceSampling,
    pub(crate) max_attempts: Option<u32>,
}


impl SigningConfig {
    /// Selects the nonce sampling policy.
    #[must_use]
    pub fn with_nonce_sampling(mut self, nonce_sampling: NonceSampling) -> Self {
        self.nonce_sampling = nonce_sampling;
        self
    }

    /// Caps the total number of nonce draws (rejected ones included); exceeding it fails
    /// with [`crate::Error::RandomnessExhausted`]. `None` removes the cap.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The configured sampling policy.
    #[must_use]
    pub fn nonce_sampling(&self) -> NonceSampling { self.nonce_sampling }

    /// The configured draw cap.
    #[must_use]
    pub fn max_attempts(&self) -> Option<u32> { self.max_attempts }
}
