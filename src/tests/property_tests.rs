use num_bigint::BigUint;
use num_traits::One;

use super::{key, tweak};
use crate::factor::factor;
use crate::fe1::{decrypt, encrypt};

#[test]
fn test_roundtrip_across_moduli() {
    let moduli: Vec<BigUint> = vec![
        BigUint::from(2u32),
        BigUint::from(3u32),
        BigUint::from(10u32),
        BigUint::from(57u32),
        BigUint::from(1000u32),
        BigUint::from(1024u32),
        BigUint::from(65_536u32),
        BigUint::from(999_983u32), // prime
        BigUint::from(u32::MAX),
        BigUint::from(u64::MAX),
        (BigUint::one() << 128usize) - BigUint::one(),
    ];

    for modulus in &moduli {
        let samples = [
            BigUint::from(0u32),
            BigUint::one(),
            modulus / BigUint::from(2u32),
            modulus - BigUint::one(),
        ];
        for plain in &samples {
            if plain >= modulus {
                continue;
            }
            let enc = encrypt(modulus, plain, &key(), &tweak()).expect("encryption failed");
            assert!(&enc < modulus, "ciphertext escaped the domain of {}", modulus);

            let dec = decrypt(modulus, &enc, &key(), &tweak()).expect("decryption failed");
            assert_eq!(plain, &dec, "round-trip failed under modulus {}", modulus);
        }
    }
}

#[test]
fn test_determinism() {
    let modulus = BigUint::from(1_000_000u32);
    let plain = BigUint::from(314_159u32);

    let first = encrypt(&modulus, &plain, &key(), &tweak()).expect("encryption failed");
    let second = encrypt(&modulus, &plain, &key(), &tweak()).expect("encryption failed");

    assert_eq!(first, second);
}

#[test]
fn test_factor_pairs_multiply_back_and_stay_ordered() {
    let moduli: Vec<BigUint> = vec![
        BigUint::from(2u32),
        BigUint::from(1000u32),
        BigUint::from(1009u32), // prime: degrades to (n, 1)
        BigUint::from(65_536u32),
        BigUint::from(2_147_483_646u32),
        BigUint::from(u32::MAX),
        BigUint::from(u64::MAX),
    ];

    for n in &moduli {
        let (a, b) = factor(n).expect("factorization failed");
        assert_eq!(&(&a * &b), n, "factors of {} do not multiply back", n);
        assert!(a >= b, "factor contract violated for {}", n);
        assert!(b >= BigUint::one());
    }
}

#[test]
fn test_factor_balances_smooth_moduli() {
    // 1000 = 2^3 * 5^3 has divisors all around sqrt(1000) ~ 31.6; the packing
    // must land b well inside an order of magnitude of the square root.
    let (a, b) = factor(&BigUint::from(1000u32)).expect("factorization failed");
    assert!(b >= BigUint::from(10u32), "b = {} is too small", b);
    assert!(a <= BigUint::from(100u32), "a = {} is too large", a);
}

#[test]
fn test_factor_rejects_degenerate_moduli() {
    assert!(factor(&BigUint::from(0u32)).is_err());
    assert!(factor(&BigUint::one()).is_err());
}
