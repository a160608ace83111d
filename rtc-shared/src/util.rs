use rand::{Rng, rng};

/// ice-char = ALPHA / DIGIT / "+" / "/"
/// <https://tools.ietf.org/html/rfc5245#section-15.1>
pub fn is_ice_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/'
}

/// generates a random string for cryptographic usage, drawing every character
/// from `runes` with the thread-local CSPRNG.
pub fn generate_crypto_random_string(n: usize, runes: &[u8]) -> String {
    let mut rng = rng();

    let rand_string: String = (0..n)
        .map(|_| {
            let idx = rng.random_range(0..runes.len());
            runes[idx] as char
        })
        .collect();

    rand_string
}
