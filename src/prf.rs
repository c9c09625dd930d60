//! Keyed round function for the Feistel permutation.
//!
//! Each encrypt/decrypt call constructs one [`RoundFn`] from the key, the
//! modulus and the tweak, uses it read-only for every round, and drops it at
//! call exit. Nothing is shared between calls, so concurrent invocations need
//! no locking.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::config::MAX_MODULUS_BYTES;
use crate::error::FpeError;
use crate::utils::encode_biguint_be;

type HmacSha256 = Hmac<Sha256>;

/// Call-scoped round-function state: a pre-keyed HMAC-SHA-256 instance plus
/// the derived state binding the modulus and the tweak. The derived state is
/// wiped when the value is dropped.
pub struct RoundFn {
    mac: HmacSha256,
    state: Zeroizing<[u8; 32]>,
}

impl RoundFn {
    /// Derive the per-call state
    /// `H0 = HMAC(key, BE32(|n|) || n || BE32(|tweak|) || tweak)`, where `n`
    /// is the minimal big-endian encoding of the modulus.
    pub fn new(key: &[u8], modulus: &BigUint, tweak: &[u8]) -> Result<Self, FpeError> {
        let n_bytes = encode_biguint_be(modulus);
        if n_bytes.len() > MAX_MODULUS_BYTES {
            return Err(FpeError::ModulusTooLarge {
                bytes: n_bytes.len(),
                max_bytes: MAX_MODULUS_BYTES,
            });
        }

        let mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");

        let mut h = mac.clone();
        h.update(&(n_bytes.len() as u32).to_be_bytes());
        h.update(&n_bytes);
        h.update(&(tweak.len() as u32).to_be_bytes());
        h.update(tweak);
        let state: Zeroizing<[u8; 32]> = Zeroizing::new(h.finalize().into_bytes().into());

        Ok(Self { mac, state })
    }

    /// Round function `F(i, R)`: the keyed digest of the derived state, the
    /// round index and the length-prefixed residue, read as an unsigned
    /// big-endian integer. Output is bounded only by the digest width; the
    /// caller reduces it modulo a Feistel half.
    pub fn f(&self, round_no: u32, residue: &BigUint) -> BigUint {
        let r_bytes = encode_biguint_be(residue);

        let mut mac = self.mac.clone();
        mac.update(self.state.as_slice());
        mac.update(&round_no.to_be_bytes());
        mac.update(&(r_bytes.len() as u32).to_be_bytes());
        mac.update(&r_bytes);

        BigUint::from_bytes_be(&mac.finalize().into_bytes())
    }
}
