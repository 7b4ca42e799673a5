use dudect_bencher::{ctbench_main, BenchRng, Class, CtRunner};
use fips186::{BigUint, DsaKey};
use rand_core::{CryptoRng, RngCore};


// 2048-bit p, 256-bit q group with a fixed key pair
include!("../../tests/fixtures/dsa_2048_256.rs");


// Test RNG to regurgitate incremented values when 'asked'
#[derive(Clone)]
#[repr(align(8))]
struct TestRng { value: u32 }

impl RngCore for TestRng {
    fn next_u32(&mut self) -> u32 { unimplemented!() }

    fn next_u64(&mut self) -> u64 { unimplemented!() }

    fn fill_bytes(&mut self, _out: &mut [u8]) { unimplemented!() }

    fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), rand_core::Error> {
        out.iter_mut().for_each(|b| *b = self.value.to_le_bytes()[0]);
        out[0..4].copy_from_slice(&self.value.to_be_bytes());
        self.value = self.value.wrapping_add(1);
        Ok(())
    }
}

impl CryptoRng for TestRng {}


fn int(hex_str: &str) -> BigUint { BigUint::from_bytes_be(&hex::decode(hex_str).unwrap()) }

fn key_with_x(x: BigUint) -> DsaKey {
    let (p, q, g) = (int(P), int(Q), int(G));
    let y = g.modpow(&x, &p);
    DsaKey::from_private_components(p, q, g, y, x)
}


fn sign(runner: &mut CtRunner, mut _rng: &mut BenchRng) {
    const ITERATIONS_INNER: usize = 5;
    const ITERATIONS_OUTER: usize = 20_000;

    let digest = [0x5Au8; 32];
    let left = key_with_x(int(X));
    assert_eq!(left.y(), &int(Y));
    let right = key_with_x(BigUint::from(3u32)); // <--- low-weight private value

    let mut classes = [Class::Right; ITERATIONS_OUTER];
    for i in (0..ITERATIONS_OUTER).step_by(2) {
        classes[i] = Class::Left;
    }

    // Same nonce stream for both classes; only the private value differs
    for class in classes {
        let sk = match class {
            Class::Left => &left,
            Class::Right => &right,
        };
        runner.run_one(class, || {
            let mut rng = TestRng { value: 12 };
            for _ in 0..ITERATIONS_INNER {
                let _ = fips186::sign_hash_raw_with_rng(&mut rng, &digest, sk).unwrap();
            }
        })
    }
}

ctbench_main!(sign);
