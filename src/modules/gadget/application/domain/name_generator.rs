//! Gadget codenames of the form `the-<adjective>-<noun>`.

use rand::Rng;

pub const ADJECTIVES: [&str; 16] = [
    "silent", "crimson", "phantom", "midnight", "iron", "velvet", "shadow", "golden", "arctic",
    "electric", "hidden", "rapid", "scarlet", "stealth", "cobalt", "emerald",
];

pub const NOUNS: [&str; 16] = [
    "falcon",
    "viper",
    "nightingale",
    "kraken",
    "mongoose",
    "panther",
    "scorpion",
    "raven",
    "cobra",
    "jaguar",
    "wolf",
    "hawk",
    "sparrow",
    "lynx",
    "owl",
    "fox",
];

/// Picks one adjective and one noun independently and uniformly.
/// Deterministic for a seeded `rng`.
pub fn generate_codename<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("the-{adjective}-{noun}")
}

#[cfg(test)]
pub(crate) fn is_generated_codename(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("the-") else {
        return false;
    };
    ADJECTIVES.iter().any(|adj| {
        rest.strip_prefix(adj)
            .and_then(|r| r.strip_prefix('-'))
            .is_some_and(|noun| NOUNS.contains(&noun))
    })
}
