#![no_main]
use fips186::traits::SerDes;
use fips186::Signature;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Deserialize a 'fuzzy' signature; DER is canonical, so anything accepted re-encodes as-is
    if let Ok(sig) = Signature::try_from_der(data) {
        assert!(sig.r() > &fips186::BigUint::from(0u32));
        assert!(sig.s() > &fips186::BigUint::from(0u32));
        assert_eq!(sig.to_der().unwrap().as_slice(), data);
        assert_eq!(sig.encoded_len().unwrap(), data.len());
    }
});
