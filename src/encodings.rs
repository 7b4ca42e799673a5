//! This file implements the DER form of a DSA signature, as in RFC 3279 section 2.2.2:
//! `Dss-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }`

use crate::error::Error;
use crate::helpers::ensure;
use crate::types::Signature;
use der::asn1::UintRef;
use der::{Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Writer};
use num_bigint_dig::BigUint;
use num_traits::Zero;


impl<'a> DecodeValue<'a> for Signature {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let r = UintRef::decode(reader)?;
            let s = UintRef::decode(reader)?;
            Ok(Signature {
                r: BigUint::from_bytes_be(r.as_bytes()),
                s: BigUint::from_bytes_be(s.as_bytes()),
            })
        })
    }
}


impl EncodeValue for Signature {
    fn value_len(&self) -> der::Result<Length> {
        UintRef::new(&self.r.to_bytes_be())?.encoded_len()?
            + UintRef::new(&self.s.to_bytes_be())?.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        UintRef::new(&self.r.to_bytes_be())?.encode(writer)?;
        UintRef::new(&self.s.to_bytes_be())?.encode(writer)?;
        Ok(())
    }
}


impl Sequence<'_> for Signature {}


/// Exact size of the DER encoding of `sig`.
pub(crate) fn sig_encoded_len(sig: &Signature) -> Result<usize, Error> {
    let len = sig.encoded_len()?;
    Ok(usize::try_from(len)?)
}


/// Writes the DER encoding of `sig` to the front of `out` and returns its length. Nothing is
/// written when `out` is too small; the error then carries the required size.
///
/// # Errors
/// Returns `BufferTooSmall` when `out` cannot hold the encoding; propagates DER errors.
pub(crate) fn sig_encode(sig: &Signature, out: &mut [u8]) -> Result<usize, Error> {
    let required = sig_encoded_len(sig)?;
    ensure!(required <= out.len(), Error::BufferTooSmall { required, available: out.len() });
    let written = sig.encode_to_slice(&mut out[..required])?.len();
    debug_assert_eq!(written, required, "DER length mismatch");
    Ok(written)
}


/// Parses a DER signature, rejecting trailing data, non-canonical integers and zero
/// components.
///
/// # Errors
/// Returns an error on malformed input.
pub(crate) fn sig_decode(bytes: &[u8]) -> Result<Signature, Error> {
    let sig = Signature::from_der(bytes)?;
    ensure!(!sig.r.is_zero(), Error::MalformedSignature("r is zero"));
    ensure!(!sig.s.is_zero(), Error::MalformedSignature("s is zero"));
    Ok(sig)
}
