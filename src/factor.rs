//! Domain factorization for the Feistel halves.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::config::FACTOR_TRIAL_DIVISOR_BOUND;
use crate::error::FpeError;

/// Split `n > 1` into `(a, b)` with `a >= b >= 1` and `a * b == n`, pushing
/// `b` toward `sqrt(n)` to keep the Feistel halves balanced.
///
/// Trial-divides by 2 and odd divisors below the configured bound; whatever
/// cofactor remains is kept as one indivisible factor. The factor list is then
/// packed largest-first, each factor into the currently smaller side. Moduli
/// with no divisor below the bound (primes among them) degrade to `(n, 1)`,
/// which still satisfies the `a >= b` contract.
///
/// Pure function of `n`; callers encrypting repeatedly under one modulus may
/// cache the pair.
pub fn factor(n: &BigUint) -> Result<(BigUint, BigUint), FpeError> {
    if *n < BigUint::from(2u32) {
        return Err(FpeError::ModulusTooSmall);
    }

    let mut rest = n.clone();
    let mut factors: Vec<BigUint> = Vec::new();

    let two = BigUint::from(2u32);
    while (&rest % &two).is_zero() {
        factors.push(two.clone());
        rest /= &two;
    }

    let mut d = 3u64;
    while d < FACTOR_TRIAL_DIVISOR_BOUND {
        let div = BigUint::from(d);
        if &div * &div > rest {
            break;
        }
        while (&rest % &div).is_zero() {
            factors.push(div.clone());
            rest /= &div;
        }
        d += 2;
    }

    if !rest.is_one() {
        factors.push(rest);
    }

    factors.sort();

    let mut a = BigUint::one();
    let mut b = BigUint::one();
    for f in factors.into_iter().rev() {
        if a <= b {
            a *= &f;
        } else {
            b *= &f;
        }
    }
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }

    Ok((a, b))
}
