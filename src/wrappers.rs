//! Typed rank/unrank layer over the numeric permutation.
//!
//! Each operation maps a native value onto a bounded integer domain, runs the
//! `[0, n)` permutation from [`crate::fe1`], and maps the result back, so the
//! ciphertext keeps the plaintext's type, length and range. Signed types are
//! ranked by a fixed shift whose extreme values are reserved sentinels;
//! decimals and dates are ranked by scaling and tick counting; strings are a
//! concatenation of independent per-character permutations.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::{
    DECIMAL_FRACTIONAL_DIGITS, DECIMAL_SCALE, MAX_DATETIME_YMD, MAX_SAFE_I32, MIN_SAFE_I32,
    SQL_MAX_DATETIME_YMD, SQL_MIN_DATETIME_YMD, TICKS_PER_SECOND,
};
use crate::error::FpeError;
use crate::fe1;

// ---------------------------------------------------------------------------
// Unsigned integers
// ---------------------------------------------------------------------------

/// Encrypt a `u64` over the default domain `[0, u64::MAX)`; `u64::MAX` itself
/// is the excluded sentinel.
pub fn encrypt_u64(key: &[u8], tweak: &[u8], source: u64) -> Result<u64, FpeError> {
    encrypt_u64_with_range(key, tweak, source, u64::MAX)
}

/// Decrypt a `u64` encrypted over the default domain.
pub fn decrypt_u64(key: &[u8], tweak: &[u8], source: u64) -> Result<u64, FpeError> {
    decrypt_u64_with_range(key, tweak, source, u64::MAX)
}

/// Encrypt a `u64` over the explicit domain `[0, range)`.
pub fn encrypt_u64_with_range(
    key: &[u8],
    tweak: &[u8],
    source: u64,
    range: u64,
) -> Result<u64, FpeError> {
    check_u64(source, range)?;
    let result = fe1::encrypt(&BigUint::from(range), &BigUint::from(source), key, tweak)?;
    Ok(result.to_u64().expect("ciphertext below a u64 modulus"))
}

/// Decrypt a `u64` encrypted over the explicit domain `[0, range)`.
pub fn decrypt_u64_with_range(
    key: &[u8],
    tweak: &[u8],
    source: u64,
    range: u64,
) -> Result<u64, FpeError> {
    check_u64(source, range)?;
    let result = fe1::decrypt(&BigUint::from(range), &BigUint::from(source), key, tweak)?;
    Ok(result.to_u64().expect("plaintext below a u64 modulus"))
}

fn check_u64(source: u64, range: u64) -> Result<(), FpeError> {
    if source == u64::MAX {
        return Err(FpeError::OutOfRange(format!(
            "source must be less than {}",
            u64::MAX
        )));
    }
    if source > range {
        return Err(FpeError::OutOfRange(
            "source must not exceed the range".to_string(),
        ));
    }
    Ok(())
}

/// Encrypt a `u32` over the default domain `[0, u32::MAX)`; `u32::MAX` itself
/// is the excluded sentinel.
pub fn encrypt_u32(key: &[u8], tweak: &[u8], source: u32) -> Result<u32, FpeError> {
    encrypt_u32_with_range(key, tweak, source, u32::MAX)
}

/// Decrypt a `u32` encrypted over the default domain.
pub fn decrypt_u32(key: &[u8], tweak: &[u8], source: u32) -> Result<u32, FpeError> {
    decrypt_u32_with_range(key, tweak, source, u32::MAX)
}

/// Encrypt a `u32` over the explicit domain `[0, range)`.
pub fn encrypt_u32_with_range(
    key: &[u8],
    tweak: &[u8],
    source: u32,
    range: u32,
) -> Result<u32, FpeError> {
    check_u32(source, range)?;
    let result = fe1::encrypt(&BigUint::from(range), &BigUint::from(source), key, tweak)?;
    Ok(result.to_u32().expect("ciphertext below a u32 modulus"))
}

/// Decrypt a `u32` encrypted over the explicit domain `[0, range)`.
pub fn decrypt_u32_with_range(
    key: &[u8],
    tweak: &[u8],
    source: u32,
    range: u32,
) -> Result<u32, FpeError> {
    check_u32(source, range)?;
    let result = fe1::decrypt(&BigUint::from(range), &BigUint::from(source), key, tweak)?;
    Ok(result.to_u32().expect("plaintext below a u32 modulus"))
}

fn check_u32(source: u32, range: u32) -> Result<(), FpeError> {
    if source == u32::MAX {
        return Err(FpeError::OutOfRange(format!(
            "source must be less than {}",
            u32::MAX
        )));
    }
    if source > range {
        return Err(FpeError::OutOfRange(
            "source must not exceed the range".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Ranked signed integers
// ---------------------------------------------------------------------------

/// Rank an `i32` into the unsigned domain by the fixed wrapping shift of
/// `i32::MIN + 1`. The two values at each extreme (`MIN`, `MIN + 1` and
/// `MAX - 1`, `MAX`) are reserved sentinels the shift cannot represent
/// faithfully and are rejected.
pub fn rank_i32(source: i32) -> Result<u32, FpeError> {
    if source >= i32::MAX - 1 {
        return Err(FpeError::OutOfRange(format!(
            "source must be less than {}",
            i32::MAX - 1
        )));
    }
    if source <= i32::MIN + 1 {
        return Err(FpeError::OutOfRange(format!(
            "source must be greater than {}",
            i32::MIN + 1
        )));
    }
    Ok(source.wrapping_add(i32::MIN + 1) as u32)
}

/// Reverse the [`rank_i32`] shift exactly.
pub fn unrank_i32(source: u32) -> i32 {
    (source as i32).wrapping_sub(i32::MIN + 1)
}

/// Encrypt a ranked `i32`; the ciphertext lives in the unsigned domain.
pub fn encrypt_i32(key: &[u8], tweak: &[u8], source: i32) -> Result<u32, FpeError> {
    let ranked = rank_i32(source)?;
    encrypt_u32(key, tweak, ranked)
}

/// Decrypt a ranked `i32` ciphertext back to its signed value.
pub fn decrypt_i32(key: &[u8], tweak: &[u8], source: u32) -> Result<i32, FpeError> {
    let result = decrypt_u32(key, tweak, source)?;
    Ok(unrank_i32(result))
}

/// Rank an `i64` into the unsigned domain; see [`rank_i32`] for the sentinel
/// rules, which apply at the 64-bit extremes here.
pub fn rank_i64(source: i64) -> Result<u64, FpeError> {
    if source >= i64::MAX - 1 {
        return Err(FpeError::OutOfRange(format!(
            "source must be less than {}",
            i64::MAX - 1
        )));
    }
    if source <= i64::MIN + 1 {
        return Err(FpeError::OutOfRange(format!(
            "source must be greater than {}",
            i64::MIN + 1
        )));
    }
    Ok(source.wrapping_add(i64::MIN + 1) as u64)
}

/// Reverse the [`rank_i64`] shift exactly.
pub fn unrank_i64(source: u64) -> i64 {
    (source as i64).wrapping_sub(i64::MIN + 1)
}

/// Encrypt a ranked `i64`; the ciphertext lives in the unsigned domain.
pub fn encrypt_i64(key: &[u8], tweak: &[u8], source: i64) -> Result<u64, FpeError> {
    let ranked = rank_i64(source)?;
    encrypt_u64(key, tweak, ranked)
}

/// Decrypt a ranked `i64` ciphertext back to its signed value.
pub fn decrypt_i64(key: &[u8], tweak: &[u8], source: u64) -> Result<i64, FpeError> {
    let result = decrypt_u64(key, tweak, source)?;
    Ok(unrank_i64(result))
}

// ---------------------------------------------------------------------------
// Safe sub-range signed integers
// ---------------------------------------------------------------------------

/// Rank an `i32` restricted to the symmetric sub-range
/// (`MIN_SAFE_I32`, `MAX_SAFE_I32`), both bounds exclusive, onto
/// `[1, 2 * MAX_SAFE_I32)` by a plain shift.
pub fn rank_safe_i32(source: i32) -> Result<i32, FpeError> {
    if source >= MAX_SAFE_I32 {
        return Err(FpeError::OutOfRange(format!(
            "source must be less than {}",
            MAX_SAFE_I32
        )));
    }
    if source <= MIN_SAFE_I32 {
        return Err(FpeError::OutOfRange(format!(
            "source must be greater than {}",
            MIN_SAFE_I32
        )));
    }
    Ok(source + MAX_SAFE_I32)
}

/// Reverse the [`rank_safe_i32`] shift exactly.
pub fn unrank_safe_i32(source: i32) -> i32 {
    source - MAX_SAFE_I32
}

/// Encrypt within the safe sub-range. The unsigned path runs with the
/// explicit range `i32::MAX - 1`, so the ciphertext always fits a
/// non-negative `i32`.
pub fn encrypt_safe_i32(key: &[u8], tweak: &[u8], source: i32) -> Result<i32, FpeError> {
    let ranked = rank_safe_i32(source)?;
    let result = encrypt_u32_with_range(key, tweak, ranked as u32, i32::MAX as u32 - 1)?;
    Ok(result as i32)
}

/// Decrypt a safe sub-range ciphertext back to its signed value.
pub fn decrypt_safe_i32(key: &[u8], tweak: &[u8], source: i32) -> Result<i32, FpeError> {
    let result = decrypt_u32_with_range(key, tweak, source as u32, i32::MAX as u32 - 1)?;
    Ok(unrank_safe_i32(result as i32))
}

// ---------------------------------------------------------------------------
// Fixed-precision decimals
// ---------------------------------------------------------------------------

/// Encrypt a fixed-precision decimal.
///
/// The value is rounded to 5 fractional digits first (banker's rounding);
/// precision beyond that is deliberately and silently lost. The rounded value
/// is scaled by `10^5` into the signed 64-bit domain and encrypted through the
/// ranked-i64 path; values whose scaled form does not fit that domain are
/// rejected. The ciphertext is the resulting unsigned integer as a whole
/// decimal.
pub fn encrypt_decimal(key: &[u8], tweak: &[u8], source: Decimal) -> Result<Decimal, FpeError> {
    let scaled = source
        .round_dp(DECIMAL_FRACTIONAL_DIGITS)
        .checked_mul(Decimal::from(DECIMAL_SCALE))
        .ok_or_else(|| {
            FpeError::OutOfRange("decimal does not fit the scaled 64-bit domain".to_string())
        })?;
    let as_i64 = scaled.to_i64().ok_or_else(|| {
        FpeError::OutOfRange("decimal does not fit the scaled 64-bit domain".to_string())
    })?;

    let encrypted = encrypt_i64(key, tweak, as_i64)?;
    Ok(Decimal::from(encrypted))
}

/// Decrypt a decimal ciphertext: invert the ranked-i64 path and descale
/// exactly back to 5 fractional digits.
pub fn decrypt_decimal(key: &[u8], tweak: &[u8], source: Decimal) -> Result<Decimal, FpeError> {
    let as_u64 = source.to_u64().ok_or_else(|| {
        FpeError::OutOfRange("ciphertext is not a whole number in the u64 domain".to_string())
    })?;

    let plain = decrypt_i64(key, tweak, as_u64)?;
    Ok(Decimal::new(plain, DECIMAL_FRACTIONAL_DIGITS))
}

// ---------------------------------------------------------------------------
// Dates and times
// ---------------------------------------------------------------------------

fn tick_epoch() -> NaiveDateTime {
    ymd_midnight((1, 1, 1))
}

fn ymd_midnight((year, month, day): (i32, u32, u32)) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid calendar date")
        .and_hms_opt(0, 0, 0)
        .expect("valid wall-clock time")
}

/// Tick count (100 ns units) since 0001-01-01T00:00:00, or `None` for dates
/// before year 1 or past the 64-bit tick horizon. Sub-tick precision is
/// truncated.
fn datetime_ticks(value: NaiveDateTime) -> Option<u64> {
    let delta = value.signed_duration_since(tick_epoch());
    if delta < Duration::zero() {
        return None;
    }
    (delta.num_seconds() as u64)
        .checked_mul(TICKS_PER_SECOND)?
        .checked_add(delta.subsec_nanos() as u64 / 100)
}

fn datetime_from_ticks(ticks: u64) -> NaiveDateTime {
    let seconds = (ticks / TICKS_PER_SECOND) as i64;
    let nanos = (ticks % TICKS_PER_SECOND) as i64 * 100;
    tick_epoch() + Duration::seconds(seconds) + Duration::nanoseconds(nanos)
}

/// Encrypt a date/time as its tick count over `[0, max_ticks)`, where
/// `max_ticks` is the tick count of 2999-12-31T00:00:00. Dates at or after
/// that bound, or before year 1, are rejected.
pub fn encrypt_datetime(
    key: &[u8],
    tweak: &[u8],
    source: NaiveDateTime,
) -> Result<NaiveDateTime, FpeError> {
    let bound = ymd_midnight(MAX_DATETIME_YMD);
    let max_ticks = datetime_ticks(bound).expect("bound is after year 1");

    let ticks = datetime_ticks(source)
        .ok_or_else(|| FpeError::OutOfRange("date is outside the encodable tick range".to_string()))?;
    if ticks >= max_ticks {
        return Err(FpeError::OutOfRange(format!(
            "date must be before {}",
            bound
        )));
    }

    let encrypted = encrypt_u64_with_range(key, tweak, ticks, max_ticks)?;
    Ok(datetime_from_ticks(encrypted))
}

/// Decrypt a date/time ciphertext, the exact inverse of [`encrypt_datetime`].
pub fn decrypt_datetime(
    key: &[u8],
    tweak: &[u8],
    source: NaiveDateTime,
) -> Result<NaiveDateTime, FpeError> {
    let max_ticks = datetime_ticks(ymd_midnight(MAX_DATETIME_YMD)).expect("bound is after year 1");

    let ticks = datetime_ticks(source)
        .ok_or_else(|| FpeError::OutOfRange("date is outside the encodable tick range".to_string()))?;

    let plain = decrypt_u64_with_range(key, tweak, ticks, max_ticks)?;
    Ok(datetime_from_ticks(plain))
}

/// Encrypt a date/time within the inclusive window `[min, max]`. Both
/// endpoints belong to the domain, so the ciphertext is itself a date in the
/// window and the endpoints round-trip.
pub fn encrypt_datetime_in_range(
    key: &[u8],
    tweak: &[u8],
    source: NaiveDateTime,
    min: NaiveDateTime,
    max: NaiveDateTime,
) -> Result<NaiveDateTime, FpeError> {
    let (min_ticks, span) = window_ticks(min, max)?;
    if source < min || source > max {
        return Err(FpeError::OutOfRange(format!(
            "date must lie within {} ..= {}",
            min, max
        )));
    }

    let offset = datetime_ticks(source).expect("window starts at or after year 1") - min_ticks;
    let encrypted = encrypt_u64_with_range(key, tweak, offset, span + 1)?;
    Ok(datetime_from_ticks(min_ticks + encrypted))
}

/// Decrypt a date/time ciphertext produced over the same inclusive window.
pub fn decrypt_datetime_in_range(
    key: &[u8],
    tweak: &[u8],
    source: NaiveDateTime,
    min: NaiveDateTime,
    max: NaiveDateTime,
) -> Result<NaiveDateTime, FpeError> {
    let (min_ticks, span) = window_ticks(min, max)?;
    if source < min || source > max {
        return Err(FpeError::OutOfRange(format!(
            "date must lie within {} ..= {}",
            min, max
        )));
    }

    let offset = datetime_ticks(source).expect("window starts at or after year 1") - min_ticks;
    let plain = decrypt_u64_with_range(key, tweak, offset, span + 1)?;
    Ok(datetime_from_ticks(min_ticks + plain))
}

fn window_ticks(min: NaiveDateTime, max: NaiveDateTime) -> Result<(u64, u64), FpeError> {
    let min_ticks = datetime_ticks(min)
        .ok_or_else(|| FpeError::OutOfRange("window is outside the encodable tick range".to_string()))?;
    let max_ticks = datetime_ticks(max)
        .ok_or_else(|| FpeError::OutOfRange("window is outside the encodable tick range".to_string()))?;
    if max_ticks < min_ticks {
        return Err(FpeError::OutOfRange("window is empty".to_string()));
    }
    Ok((min_ticks, max_ticks - min_ticks))
}

/// Inclusive lower bound of the SQL Server datetime window.
pub fn sql_datetime_min() -> NaiveDateTime {
    ymd_midnight(SQL_MIN_DATETIME_YMD)
}

/// Inclusive upper bound of the SQL Server datetime window.
pub fn sql_datetime_max() -> NaiveDateTime {
    ymd_midnight(SQL_MAX_DATETIME_YMD)
}

/// Encrypt a date/time within the SQL Server datetime window
/// (1753-01-01 ..= 9999-12-31).
pub fn encrypt_sql_datetime(
    key: &[u8],
    tweak: &[u8],
    source: NaiveDateTime,
) -> Result<NaiveDateTime, FpeError> {
    encrypt_datetime_in_range(key, tweak, source, sql_datetime_min(), sql_datetime_max())
}

/// Decrypt a date/time ciphertext produced over the SQL Server window.
pub fn decrypt_sql_datetime(
    key: &[u8],
    tweak: &[u8],
    source: NaiveDateTime,
) -> Result<NaiveDateTime, FpeError> {
    decrypt_datetime_in_range(key, tweak, source, sql_datetime_min(), sql_datetime_max())
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Number of Unicode scalar values; the per-character permutation domain.
const CHAR_DOMAIN: u64 = 0x11_0000 - 0x800;

/// Rank a `char` onto `[0, CHAR_DOMAIN)` by closing the surrogate gap.
fn rank_char(c: char) -> u64 {
    let v = c as u32;
    u64::from(if v < 0xD800 { v } else { v - 0x800 })
}

fn unrank_char(rank: u64) -> char {
    let v = rank as u32;
    let scalar = if v < 0xD800 { v } else { v + 0x800 };
    char::from_u32(scalar).expect("rank skips the surrogate gap")
}

/// Encrypt a string one character at a time, preserving the character count.
///
/// Each character is permuted independently over the scalar-value domain; the
/// string as a whole is NOT a single permutation of its full domain. Equal
/// characters therefore map to equal ciphertext characters under one
/// key/tweak pair. Altering this would change the security properties, so the
/// per-character construction is part of the contract.
pub fn encrypt_string(key: &[u8], tweak: &[u8], source: &str) -> Result<String, FpeError> {
    let mut result = String::with_capacity(source.len());
    for c in source.chars() {
        let encrypted = encrypt_u64_with_range(key, tweak, rank_char(c), CHAR_DOMAIN)?;
        result.push(unrank_char(encrypted));
    }
    Ok(result)
}

/// Decrypt a string one character at a time, the exact inverse of
/// [`encrypt_string`].
pub fn decrypt_string(key: &[u8], tweak: &[u8], source: &str) -> Result<String, FpeError> {
    let mut result = String::with_capacity(source.len());
    for c in source.chars() {
        let plain = decrypt_u64_with_range(key, tweak, rank_char(c), CHAR_DOMAIN)?;
        result.push(unrank_char(plain));
    }
    Ok(result)
}
