use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Minimal unsigned big-endian encoding of `n`; empty iff `n` is zero.
///
/// The round function length-prefixes every encoded integer, so the encoding
/// must be canonical: no leading zero bytes, and zero encodes to nothing.
pub fn encode_biguint_be(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    }
}

/// Mathematically-correct non-negative `x mod m`, as opposed to the truncating
/// remainder operator.
pub(crate) fn mod_positive(x: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    let mut r = x % &m;
    if r.sign() == Sign::Minus {
        r += &m;
    }
    r.to_biguint().expect("non-negative")
}
