use rand::{Rng, RngCore};

use crate::names::pick;

// Plausible SMB share and staging directory names.
const SHARE_NAMES: &[&str] = &[
    "SHARE", "DATA", "FILES", "DOCS", "PUBLIC", "TRANSFER", "COMMON",
];
const DIR_PREFIXES: &[&str] = &["tmp", "temp", "cache", "data", "backup", "old"];

/// Generate a plausible share name, sometimes with a trailing digit.
pub fn generate_share(rng: &mut dyn RngCore) -> String {
    let mut base = pick(rng, SHARE_NAMES);
    if rng.gen_bool(0.5) {
        base.push_str(&rng.gen_range(1u32..=9).to_string());
    }
    base
}

/// Generate a plausible staging directory name.
///
/// The `__` marker denotes a hidden/temp directory.
pub fn generate_directory(rng: &mut dyn RngCore) -> String {
    let prefix = pick(rng, DIR_PREFIXES);
    let suffix = rng.gen_range(100u32..=999);
    format!("__{}{}", prefix, suffix)
}
