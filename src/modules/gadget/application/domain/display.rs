use rand::Rng;

/// Fresh per-listing estimate in `1..=100`. Never stored.
pub fn roll_success_probability<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=100)
}

pub fn format_display_line(name: &str, success_probability: u8) -> String {
    format!("{name} - {success_probability}% success probability")
}
