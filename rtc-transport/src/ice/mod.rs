use shared::util::generate_crypto_random_string;


pub mod credentials;
pub mod mode;
pub mod parameters;

/// <https://tools.ietf.org/html/rfc5245#section-15.4>
/// ice-ufrag-att = "ice-ufrag" ":" ufrag
/// ice-pwd-att   = "ice-pwd" ":" password
/// ufrag         = 4*256ice-char
/// password      = 22*256ice-char
pub const ICE_UFRAG_MIN_LENGTH: usize = 4;
pub const ICE_UFRAG_MAX_LENGTH: usize = 256;
pub const ICE_PWD_MIN_LENGTH: usize = 22;
pub const ICE_PWD_MAX_LENGTH: usize = 256;

/// Lengths of locally generated credentials.
pub const ICE_UFRAG_LENGTH: usize = 16;
pub const ICE_PWD_LENGTH: usize = 32;

const RUNES_ICE_CHAR: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+/";

/// Generates ICE pwd.
/// This internally uses `generate_crypto_random_string`.
pub(crate) fn generate_pwd() -> String {
    generate_crypto_random_string(ICE_PWD_LENGTH, RUNES_ICE_CHAR)
}

/// ICE user fragment.
/// This internally uses `generate_crypto_random_string`.
pub(crate) fn generate_ufrag() -> String {
    generate_crypto_random_string(ICE_UFRAG_LENGTH, RUNES_ICE_CHAR)
}
