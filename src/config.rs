//! Library constants and domain parameters.

/// Maximum length in bytes of a modulus' big-endian encoding. Format-preserving
/// encryption targets structured fields (identifiers, amounts, dates), nothing
/// wider than 128 bits; the cap keeps round-function message sizes predictable.
pub const MAX_MODULUS_BYTES: usize = 128 / 8;

/// Feistel round count. The minimum safe count is `2 + log_a(b)`; the
/// factorizer guarantees `a >= b`, so `log_a(b) <= 1` and 3 rounds suffice.
pub const FEISTEL_ROUNDS: u32 = 3;

/// Upper bound (exclusive) on trial divisors used when factoring a modulus.
pub const FACTOR_TRIAL_DIVISOR_BOUND: u64 = 1 << 16;

/// Largest value accepted by the safe sub-range i32 path (exclusive sentinel).
pub const MAX_SAFE_I32: i32 = 1_073_741_823;

/// Smallest value accepted by the safe sub-range i32 path (exclusive sentinel).
pub const MIN_SAFE_I32: i32 = -1_073_741_823;

/// Fractional digits kept by the decimal codec; further digits are truncated.
pub const DECIMAL_FRACTIONAL_DIGITS: u32 = 5;

/// Scale factor lifting a rounded decimal into the signed 64-bit domain.
pub const DECIMAL_SCALE: i64 = 100_000;

/// 100-nanosecond ticks per second, the resolution of the date/time codec.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// First calendar day (exclusive upper bound) no longer encryptable by the
/// open-ended date/time path. Dates are ranked as ticks since
/// 0001-01-01T00:00:00.
pub const MAX_DATETIME_YMD: (i32, u32, u32) = (2999, 12, 31);

/// Inclusive lower bound of the SQL Server datetime window.
pub const SQL_MIN_DATETIME_YMD: (i32, u32, u32) = (1753, 1, 1);

/// Inclusive upper bound of the SQL Server datetime window.
pub const SQL_MAX_DATETIME_YMD: (i32, u32, u32) = (9999, 12, 31);
