//! FE1 Format-Preserving Encryption
//!
//! This module implements the FE1 scheme from "Format-Preserving Encryption"
//! by Bellare, Ristenpart, Rogaway and Stegers (http://eprint.iacr.org/2009/251):
//! a keyed pseudorandom permutation of an arbitrary integer domain `[0, n)`.
//!
//! # Scheme overview
//!
//! The modulus is split into two factors `a >= b` with `a * b == n`. Each
//! round rewrites `X` between its base-`b` and base-`a` representations while
//! mixing in the keyed round function:
//!
//! 1. `L = X div b`, `R = X mod b`
//! 2. `W = (L + F(i, R)) mod a`
//! 3. `X = a * R + W`
//!
//! Decryption applies the rounds with reversed indices and subtracts the round
//! function under a non-negative mod, so for any fixed key, tweak and modulus
//! the two operations are exact mutual inverses on `[0, n)`.

use num_bigint::{BigInt, BigUint};

use crate::config::FEISTEL_ROUNDS;
use crate::error::FpeError;
use crate::factor::factor;
use crate::prf::RoundFn;
use crate::utils::mod_positive;

/// Encrypt `plaintext` in `[0, modulus)` under `key` and the public `tweak`.
///
/// The same key, tweak and modulus must be supplied to [`decrypt`] to invert
/// the permutation. Deterministic: identical inputs yield identical outputs.
pub fn encrypt(
    modulus: &BigUint,
    plaintext: &BigUint,
    key: &[u8],
    tweak: &[u8],
) -> Result<BigUint, FpeError> {
    if plaintext >= modulus {
        return Err(FpeError::OutOfRange(format!(
            "plaintext {} is outside the domain [0, {})",
            plaintext, modulus
        )));
    }

    let prf = RoundFn::new(key, modulus, tweak)?;
    let (a, b) = factor(modulus)?;
    let r = rounds(&a, &b)?;

    let mut x = plaintext.clone();
    for i in 0..r {
        let left = &x / &b;
        let right = &x % &b;

        let w = (left + prf.f(i, &right)) % &a;
        x = &a * &right + w;
    }

    Ok(x)
}

/// Decrypt `ciphertext` in `[0, modulus)`, the exact inverse of [`encrypt`]
/// under the same key, tweak and modulus.
pub fn decrypt(
    modulus: &BigUint,
    ciphertext: &BigUint,
    key: &[u8],
    tweak: &[u8],
) -> Result<BigUint, FpeError> {
    if ciphertext >= modulus {
        return Err(FpeError::OutOfRange(format!(
            "ciphertext {} is outside the domain [0, {})",
            ciphertext, modulus
        )));
    }

    let prf = RoundFn::new(key, modulus, tweak)?;
    let (a, b) = factor(modulus)?;
    let r = rounds(&a, &b)?;

    let mut x = ciphertext.clone();
    for i in 0..r {
        let w = &x % &a;
        let right = &x / &a;

        let shifted = BigInt::from(w) - BigInt::from(prf.f(r - i - 1, &right));
        let left = mod_positive(&shifted, &a);
        x = &b * &left + &right;
    }

    Ok(x)
}

/// Round count for a factor pair. The minimum safe count is `2 + log_a(b)`;
/// the factorizer contract `a >= b` bounds `log_a(b)` by 1, so confirm the
/// contract and return 3.
fn rounds(a: &BigUint, b: &BigUint) -> Result<u32, FpeError> {
    if a < b {
        return Err(FpeError::UnbalancedFactors);
    }
    Ok(FEISTEL_ROUNDS)
}
