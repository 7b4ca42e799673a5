// This file implements DSA signature generation over a precomputed message digest, per
// FIPS 186 section 4.6, with per-message secret number generation by rejection sampling.

use crate::error::Error;
use crate::helpers::{ensure, secret_buffer};
use crate::types::{DsaKey, KeyKind, NonceSampling, Signature, SigningConfig};
use crate::MAX_GROUP_BYTES;
use num_bigint_dig::{BigUint, ModInverse};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;


/// Counts nonce draws against the optional cap in [`SigningConfig`].
struct Attempts {
    used: u32,
    max: Option<u32>,
}

impl Attempts {
    fn new(max: Option<u32>) -> Self { Self { used: 0, max } }

    fn draw(&mut self) -> Result<(), Error> {
        if let Some(max) = self.max {
            if self.used >= max {
                log::debug!("DSA sign: no valid nonce after {} draws", self.used);
                return Err(Error::RandomnessExhausted);
            }
        }
        self.used = self.used.saturating_add(1);
        Ok(())
    }
}


/// Draws the per-message secret `k` into `buf` until `k > 1` and `gcd(k, q) = 1`, and
/// (under [`NonceSampling::Strict`]) `k < q`.
///
/// **Input**: `buf` of exactly `qord` bytes, the group order `q`. <br>
/// **Output**: `k`, wrapped so it is wiped on drop.
///
/// # Errors
/// Returns an error when the random number generator fails or the draw cap is reached.
fn sample_nonce(
    rng: &mut impl CryptoRngCore, buf: &mut [u8], q: &BigUint, sampling: NonceSampling,
    attempts: &mut Attempts,
) -> Result<Zeroizing<BigUint>, Error> {
    loop {
        attempts.draw()?;

        // k ← qord random bytes, read big-endian; reversed in place so no unwiped copy is made
        rng.try_fill_bytes(buf).map_err(Error::Random)?;
        buf.reverse();
        let k = Zeroizing::new(BigUint::from_bytes_le(buf));

        // k > 1 ?
        if *k <= BigUint::one() {
            log::trace!("DSA sign: nonce <= 1, resampling (draw {})", attempts.used);
            continue;
        }

        if sampling == NonceSampling::Strict && *k >= *q {
            log::trace!("DSA sign: nonce >= q, resampling (draw {})", attempts.used);
            continue;
        }

        // gcd(k, q) = 1 ?
        if !k.gcd(q).is_one() {
            log::trace!("DSA sign: nonce not coprime to q, resampling (draw {})", attempts.used);
            continue;
        }

        return Ok(k);
    }
}


/// Signs `digest` with the private key, returning `(r, s)`.
///
/// **Input**: `digest`, read in full as a big-endian integer `h`; a private `key`. <br>
/// **Output**: `r = (g^k mod p) mod q`, `s = k^{-1}·(h + x·r) mod q`, both non-zero.
///
/// A zero `r` or `s` discards the attempt and restarts from nonce sampling with fresh
/// randomness; nonce rejections only redraw bytes. Nothing is returned until both
/// components are valid.
///
/// # Errors
/// Returns an error for a public key, an oversized group order, allocation failure, a
/// failed random source or modular inverse, or when the draw cap is reached.
pub(crate) fn sign_raw(
    rng: &mut impl CryptoRngCore, digest: &[u8], key: &DsaKey, config: &SigningConfig,
) -> Result<Signature, Error> {
    ensure!(key.kind == KeyKind::Private, Error::NotPrivateKey);
    ensure!(key.qord < MAX_GROUP_BYTES, Error::InvalidArgument("group order too large"));

    let DsaKey { p, q, g, x, qord, .. } = key;

    // Secret byte buffer, wiped on every exit path
    let mut buf = secret_buffer(MAX_GROUP_BYTES)?;
    let h = BigUint::from_bytes_be(digest);
    let mut attempts = Attempts::new(config.max_attempts);

    loop {
        let k = sample_nonce(rng, &mut buf[..*qord], q, config.nonce_sampling, &mut attempts)?;

        // kinv ← k^{-1} mod q
        let k_ref: &BigUint = &k;
        let inv = Zeroizing::new(
            k_ref.mod_inverse(q).ok_or(Error::Arithmetic("nonce has no inverse modulo q"))?,
        );
        let kinv = Zeroizing::new(
            inv.to_biguint().ok_or(Error::Arithmetic("negative inverse modulo q"))?,
        );

        // r ← (g^k mod p) mod q
        let r = g.modpow(&k, p) % q;
        if r.is_zero() {
            log::debug!("DSA sign: r = 0, restarting with a fresh nonce (draw {})", attempts.used);
            continue;
        }

        // s ← (h + x·r)·kinv mod q, with both unreduced products held for wiping
        let mut tmp = Zeroizing::new(x * &r);
        *tmp += &h;
        let prod = Zeroizing::new(&*tmp * &*kinv);
        let s = &*prod % q;
        if s.is_zero() {
            log::debug!("DSA sign: s = 0, restarting with a fresh nonce (draw {})", attempts.used);
            continue;
        }

        return Ok(Signature { r, s });
    }
}
