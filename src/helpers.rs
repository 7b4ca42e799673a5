use crate::error::Error;
use alloc::vec::Vec;
use num_bigint_dig::BigUint;
use zeroize::Zeroizing;

/// If the condition is not met, return the given error. Borrowed from the `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub(crate) use ensure; // make available throughout crate


/// Number of bytes needed to hold `a` in big-endian form (zero takes no bytes)
pub(crate) fn byte_length(a: &BigUint) -> usize { a.bits().div_ceil(8) }


/// Allocates a zero-filled secret scratch buffer of exactly `len` bytes. The allocation is
/// fallible rather than aborting, and the returned wrapper wipes the whole capacity on drop.
pub(crate) fn secret_buffer(len: usize) -> Result<Zeroizing<Vec<u8>>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;
    buf.resize(len, 0u8);
    Ok(Zeroizing::new(buf))
}
