//! Shared fixtures for the FPE test suite.

/// UTF-16LE bytes of the reference secret key string.
pub fn key() -> Vec<u8> {
    utf16_bytes("Here's my secret key!")
}

/// UTF-16LE bytes of the reference tweak string.
pub fn tweak() -> Vec<u8> {
    utf16_bytes("Here's my tweak")
}

fn utf16_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(|unit| unit.to_le_bytes()).collect()
}

pub mod integration;

pub mod property_tests;
