use num_bigint::BigUint;
use num_traits::One;

use super::{key, tweak};
use crate::error::FpeError;
use crate::fe1::{decrypt, encrypt};

#[test]
fn test_numeric_roundtrip_zero() {
    let modulus = BigUint::from(1000u32);
    let plain = BigUint::from(0u32);

    let enc = encrypt(&modulus, &plain, &key(), &tweak()).expect("encryption failed");
    let dec = decrypt(&modulus, &enc, &key(), &tweak()).expect("decryption failed");

    assert_eq!(plain, dec);
}

#[test]
fn test_numeric_roundtrip_full_domain() {
    let modulus = BigUint::from(1000u32);

    for x in 0u32..1000 {
        let plain = BigUint::from(x);
        let enc = encrypt(&modulus, &plain, &key(), &tweak()).expect("encryption failed");
        assert!(enc < modulus, "ciphertext escaped the domain for {}", x);

        let dec = decrypt(&modulus, &enc, &key(), &tweak()).expect("decryption failed");
        assert_eq!(plain, dec, "round-trip failed for {}", x);
    }
}

#[test]
fn test_prime_modulus_roundtrip() {
    // No divisor near sqrt(n); the factorizer degrades to (n, 1) and the
    // permutation must still invert exactly.
    let modulus = BigUint::from(1009u32);

    for x in (0u32..1009).step_by(7) {
        let plain = BigUint::from(x);
        let enc = encrypt(&modulus, &plain, &key(), &tweak()).expect("encryption failed");
        let dec = decrypt(&modulus, &enc, &key(), &tweak()).expect("decryption failed");
        assert_eq!(plain, dec, "round-trip failed for {}", x);
    }
}

#[test]
fn test_widest_modulus_roundtrip() {
    // 16-byte encoding, the widest the round function accepts.
    let modulus = (BigUint::one() << 128usize) - BigUint::one();
    let plain = BigUint::from(123_456_789_012_345u64);

    let enc = encrypt(&modulus, &plain, &key(), &tweak()).expect("encryption failed");
    let dec = decrypt(&modulus, &enc, &key(), &tweak()).expect("decryption failed");

    assert_eq!(plain, dec);
}

#[test]
fn test_modulus_exceeding_cap_rejected() {
    // 17-byte encoding.
    let modulus = BigUint::one() << 128usize;
    let plain = BigUint::from(0u32);

    let result = encrypt(&modulus, &plain, &key(), &tweak());
    assert_eq!(
        result,
        Err(FpeError::ModulusTooLarge {
            bytes: 17,
            max_bytes: 16
        })
    );
}

#[test]
fn test_modulus_one_rejected() {
    let modulus = BigUint::one();
    let plain = BigUint::from(0u32);

    let result = encrypt(&modulus, &plain, &key(), &tweak());
    assert_eq!(result, Err(FpeError::ModulusTooSmall));
}

#[test]
fn test_plaintext_at_modulus_rejected() {
    let modulus = BigUint::from(1000u32);

    for x in [1000u32, 1001, 5000] {
        let result = encrypt(&modulus, &BigUint::from(x), &key(), &tweak());
        assert!(
            matches!(result, Err(FpeError::OutOfRange(_))),
            "plaintext {} must be rejected",
            x
        );
    }
}

#[test]
fn test_ciphertext_at_modulus_rejected() {
    let modulus = BigUint::from(1000u32);

    let result = decrypt(&modulus, &BigUint::from(1000u32), &key(), &tweak());
    assert!(matches!(result, Err(FpeError::OutOfRange(_))));
}

#[test]
fn test_modulus_zero_rejected() {
    let modulus = BigUint::from(0u32);

    let result = encrypt(&modulus, &BigUint::from(0u32), &key(), &tweak());
    assert!(matches!(result, Err(FpeError::OutOfRange(_))));
}

#[test]
fn test_empty_tweak_roundtrip() {
    let modulus = BigUint::from(10_000u32);
    let plain = BigUint::from(42u32);

    let enc = encrypt(&modulus, &plain, &key(), &[]).expect("encryption failed");
    let dec = decrypt(&modulus, &enc, &key(), &[]).expect("decryption failed");

    assert_eq!(plain, dec);
}
