#![no_main]
use fips186::traits::{SerDes, Signer};
use fips186::{BigUint, DsaKey, Error, NonceSampling, Signature, SigningConfig};
use libfuzzer_sys::fuzz_target;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;


// Helper to create deterministic RNG from data
fn create_rng(seed_data: &[u8]) -> ChaCha20Rng {
    let mut seed = [0u8; 32];
    let len = seed_data.len().min(32);
    seed[..len].copy_from_slice(&seed_data[..len]);
    ChaCha20Rng::from_seed(seed)
}


fuzz_target!(|data: &[u8]| {
    // Skip empty inputs
    if data.is_empty() {
        return;
    }

    let mut rng = create_rng(data);

    // p = 2q + 1 with q = 1019, g = 4 of order q; x and y derived from the input
    let p = BigUint::from(2039u32);
    let q = BigUint::from(1019u32);
    let g = BigUint::from(4u32);
    let x = BigUint::from(1u32 + u32::from(data[0]) % 1018);
    let y = g.modpow(&x, &p);
    let sk = DsaKey::from_private_components(p, q.clone(), g, y, x);

    // Whole input is the digest, of any length
    let sig = sk.try_sign_raw_with_rng(&mut rng, data).unwrap();
    let zero = BigUint::from(0u32);
    assert!(sig.r() > &zero && sig.r() < &q);
    assert!(sig.s() > &zero && sig.s() < &q);

    // DER output decodes to the same pair
    let der = sig.to_der().unwrap();
    assert_eq!(Signature::try_from_der(&der).unwrap(), sig);

    // Output buffer sizes around the exact length
    let cut = usize::from(data[0]) % (der.len() + 2);
    let mut out = vec![0xAAu8; cut];
    match sk.try_sign_with_rng(&mut rng, data, &mut out) {
        Ok(len) => assert!(len <= cut),
        Err(Error::BufferTooSmall { required, available }) => {
            assert_eq!(available, cut);
            assert!(required > cut);
            assert!(out.iter().all(|&b| b == 0xAA));
        }
        Err(e) => panic!("unexpected error {e:?}"),
    }

    // Capped strict sampling either signs or reports exhaustion
    let config = SigningConfig::default()
        .with_nonce_sampling(NonceSampling::Strict)
        .with_max_attempts(Some(u32::from(data[data.len() - 1] % 4)));
    match fips186::sign_hash_raw_with_config(&mut rng, data, &sk, &config) {
        Ok(sig) => assert!(sig.r() < &q && sig.s() < &q),
        Err(Error::RandomnessExhausted) => (),
        Err(e) => panic!("unexpected error {e:?}"),
    }

    // Public half never signs
    assert!(matches!(sk.to_public().try_sign_raw_with_rng(&mut rng, data), Err(Error::NotPrivateKey)));
});
