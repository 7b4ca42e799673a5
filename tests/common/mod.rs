// Test-side collaborators: domain parameter and key generation, verification, and
// replaying RNGs. None of this is part of the crate's API.
#![allow(dead_code)]

use fips186::{DsaKey, Signature};
use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, ModInverse, RandBigInt, RandPrime, ToBigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_chacha::rand_core::SeedableRng;
use rand_core::{CryptoRng, RngCore};
use std::collections::VecDeque;
use std::sync::OnceLock;


pub fn init_logging() { let _ = env_logger::builder().is_test(true).try_init(); }


// ----- DOMAIN PARAMETERS AND KEYS -----

pub struct Group {
    pub p: BigUint,
    pub q: BigUint,
    pub g: BigUint,
}

/// A 512-bit p / 160-bit q group, generated once per test binary from a fixed seed.
pub fn group() -> &'static Group {
    static GROUP: OnceLock<Group> = OnceLock::new();
    GROUP.get_or_init(|| generate_group(512, 160, 186))
}

fn generate_group(p_bits: usize, q_bits: usize, seed: u64) -> Group {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let one = BigUint::one();
    let q: BigUint = rng.gen_prime(q_bits);

    // p = m·q + 1 with m even
    let lo = &one << (p_bits - q_bits - 1);
    let hi = &one << (p_bits - q_bits);
    let p = loop {
        let mut m = rng.gen_biguint_range(&lo, &hi);
        if m.is_odd() {
            m += &one;
        }
        let p = &q * &m + &one;
        if probably_prime(&p, 20) {
            break p;
        }
    };

    // g = h^((p-1)/q) mod p, the first h giving g != 1
    let e = (&p - &one) / &q;
    let mut h = BigUint::from(2u32);
    let g = loop {
        let g = h.modpow(&e, &p);
        if g != one {
            break g;
        }
        h += &one;
    };

    Group { p, q, g }
}

pub fn keypair(rng: &mut (impl RngCore + CryptoRng)) -> (DsaKey, DsaKey) {
    let Group { p, q, g } = group();
    let x = rng.gen_biguint_range(&BigUint::one(), q);
    let y = g.modpow(&x, p);
    let sk = DsaKey::from_private_components(p.clone(), q.clone(), g.clone(), y, x);
    (sk.to_public(), sk)
}

/// p = 11, q = 5, g = 4 (order 5), x = 3, y = 9. Small enough to script every nonce.
pub fn toy_key() -> DsaKey {
    DsaKey::from_private_components(
        BigUint::from(11u32),
        BigUint::from(5u32),
        BigUint::from(4u32),
        BigUint::from(9u32),
        BigUint::from(3u32),
    )
}

// 2048-bit p, 256-bit q group with a fixed key pair
include!("../fixtures/dsa_2048_256.rs");

fn int(hex_str: &str) -> BigUint { BigUint::from_bytes_be(&hex::decode(hex_str).unwrap()) }

pub fn fixed_2048_key() -> DsaKey {
    DsaKey::from_private_components(int(P), int(Q), int(G), int(Y), int(X))
}


// ----- VERIFICATION -----

/// FIPS 186 section 4.7 over the full digest integer.
pub fn verify(pk: &DsaKey, digest: &[u8], sig: &Signature) -> bool {
    let (p, q, g, y) = (pk.p(), pk.q(), pk.g(), pk.y());
    let (r, s) = (sig.r(), sig.s());
    if r.is_zero() || s.is_zero() || r >= q || s >= q {
        return false;
    }
    let Some(w) = s.mod_inverse(q).and_then(|w| w.to_biguint()) else {
        return false;
    };
    let h = BigUint::from_bytes_be(digest);
    let u1 = (&h * &w) % q;
    let u2 = (r * &w) % q;
    let v = ((g.modpow(&u1, p) * y.modpow(&u2, p)) % p) % q;
    &v == r
}


// ----- RNGS TO REPLAY OR FAIL -----

/// Hands out scripted bytes in order; panics when the script runs dry.
pub struct ScriptRng {
    data: VecDeque<u8>,
}

impl RngCore for ScriptRng {
    fn next_u32(&mut self) -> u32 { unimplemented!() }

    fn next_u64(&mut self) -> u64 { unimplemented!() }

    fn fill_bytes(&mut self, out: &mut [u8]) {
        out.iter_mut().for_each(|b| *b = self.data.pop_front().expect("test rng problem"));
    }

    fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(out);
        Ok(())
    }
}

impl CryptoRng for ScriptRng {}

impl ScriptRng {
    pub fn new(bytes: &[u8]) -> Self { ScriptRng { data: bytes.iter().copied().collect() } }

    pub fn remaining(&self) -> usize { self.data.len() }
}


/// Serves `prefix` once, then reports failure on every later call.
pub struct FailingRng {
    prefix: Option<Vec<u8>>,
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 { unimplemented!() }

    fn next_u64(&mut self) -> u64 { unimplemented!() }

    fn fill_bytes(&mut self, _out: &mut [u8]) { unimplemented!() }

    fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), rand_core::Error> {
        match self.prefix.take() {
            Some(prefix) => {
                out.copy_from_slice(&prefix);
                Ok(())
            }
            None => {
                let code = core::num::NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
                Err(rand_core::Error::from(code))
            }
        }
    }
}

impl CryptoRng for FailingRng {}

impl FailingRng {
    pub fn new(prefix: Option<&[u8]>) -> Self { FailingRng { prefix: prefix.map(<[u8]>::to_vec) } }
}
