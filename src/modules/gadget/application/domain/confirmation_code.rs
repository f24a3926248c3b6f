use rand::Rng;

pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const CODE_LENGTH: usize = 6;

/// Samples each character uniformly from [`CODE_ALPHABET`].
pub fn generate_confirmation_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Codes are issued upper-case; user input is compared after trimming and upper-casing.
pub fn normalize_confirmation_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
