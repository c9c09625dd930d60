//! Format-preserving encryption over arbitrary integer domains.
//!
//! This crate implements the FE1 scheme from "Format-Preserving Encryption"
//! by Bellare, Ristenpart, Rogaway and Stegers: a keyed pseudorandom
//! permutation of `[0, n)` built from three Feistel rounds over an
//! HMAC-SHA-256 round function, plus a rank/unrank layer that carries native
//! types (integers, decimals, dates, strings) onto the numeric domain and
//! back. Ciphertexts keep the plaintext's type, length and valid range, so
//! downstream format validation keeps working.

pub mod config;
pub mod error;
pub mod factor;
pub mod fe1;
pub mod prf;
pub mod utils;
pub mod wrappers;

#[cfg(test)]
pub mod tests;

pub use crate::error::FpeError;
pub use crate::factor::factor;
pub use crate::fe1::{decrypt, encrypt};
pub use crate::wrappers::{
    decrypt_datetime, decrypt_datetime_in_range, decrypt_decimal, decrypt_i32, decrypt_i64,
    decrypt_safe_i32, decrypt_sql_datetime, decrypt_string, decrypt_u32, decrypt_u32_with_range,
    decrypt_u64, decrypt_u64_with_range, encrypt_datetime, encrypt_datetime_in_range,
    encrypt_decimal, encrypt_i32, encrypt_i64, encrypt_safe_i32, encrypt_sql_datetime,
    encrypt_string, encrypt_u32, encrypt_u32_with_range, encrypt_u64, encrypt_u64_with_range,
    rank_i32, rank_i64, rank_safe_i32, sql_datetime_max, sql_datetime_min, unrank_i32, unrank_i64,
    unrank_safe_i32,
};
