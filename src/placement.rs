use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use rand::RngCore;

use crate::error::MorphError;
use crate::weighted::select;

/// Weighted primary candidates plus the dedicated last-resort path for one
/// share. The fallback never appears among the primaries.
struct SharePlacement {
    primary: &'static [(&'static str, u32)],
    fallback: &'static str,
}

// Heavier weights go to directories with high legitimate write traffic, so
// repeated drops statistically favor low-visibility locations while still
// varying. First entry is the priority-mode result.
const C_DRIVE_PLACEMENTS: &[(&str, u32)] = &[
    ("Windows\\Logs\\", 30),
    ("Windows\\System32\\LogFiles\\", 25),
    ("ProgramData\\Microsoft\\Diagnosis\\", 20),
    ("Users\\Public\\Downloads\\", 15),
    ("Windows\\Debug\\", 10),
];

// ADMIN$ is rooted at the Windows directory, so entries are relative to it.
const ADMIN_PLACEMENTS: &[(&str, u32)] = &[
    ("Logs\\", 35),
    ("System32\\LogFiles\\", 30),
    ("Debug\\", 20),
    ("Tracing\\", 15),
];

/// Last-resort path for shares without a catalogued placement set.
pub const DEFAULT_FALLBACK: &str = "Windows\\Temp\\";

static PLACEMENTS: Lazy<HashMap<&'static str, SharePlacement>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "C$",
        SharePlacement {
            primary: C_DRIVE_PLACEMENTS,
            fallback: "Windows\\Temp\\",
        },
    );
    map.insert(
        "ADMIN$",
        SharePlacement {
            primary: ADMIN_PLACEMENTS,
            fallback: "Temp\\",
        },
    );
    map
});

// Lookup is case-insensitive and tolerates a missing '$'.
fn normalize(share: &str) -> String {
    let mut key = share.trim().to_uppercase();
    if !key.ends_with('$') {
        key.push('$');
    }
    key
}

/// Resolve a plausible sub-path under `share`.
///
/// Priority mode (`weighted == false`) always yields the first-declared
/// entry. Shares without a catalogued set degrade to [`DEFAULT_FALLBACK`]
/// rather than failing.
pub fn resolve_path(
    rng: &mut dyn RngCore,
    share: &str,
    weighted: bool,
) -> Result<&'static str, MorphError> {
    let key = normalize(share);
    match PLACEMENTS.get(key.as_str()) {
        Some(placement) => select(rng, placement.primary, weighted).map(|path| *path),
        None => {
            debug!("* [Placement] no catalogue for '{}', using default", key);
            Ok(DEFAULT_FALLBACK)
        }
    }
}

/// The dedicated fallback path for `share`, for use only after every primary
/// candidate has been rejected by the deployment step. Ignores weights.
pub fn resolve_fallback(share: &str) -> &'static str {
    PLACEMENTS
        .get(normalize(share).as_str())
        .map(|placement| placement.fallback)
        .unwrap_or(DEFAULT_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn normalization_is_case_and_marker_insensitive() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = resolve_path(&mut rng, "c$", false).unwrap();
        let b = resolve_path(&mut rng, "C$", false).unwrap();
        let c = resolve_path(&mut rng, "C", false).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(resolve_fallback("admin"), resolve_fallback("ADMIN$"));
    }

    #[test]
    fn unknown_share_degrades_to_default() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(resolve_path(&mut rng, "Z$", true).unwrap(), DEFAULT_FALLBACK);
        assert_eq!(resolve_fallback("Z$"), DEFAULT_FALLBACK);
    }

    #[test]
    fn admin_priority_entry_is_logs() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(resolve_path(&mut rng, "ADMIN$", false).unwrap(), "Logs\\");
    }

    #[test]
    fn c_drive_fallback_is_windows_temp() {
        for _ in 0..5 {
            assert_eq!(resolve_fallback("C$"), "Windows\\Temp\\");
        }
    }

    #[test]
    fn fallback_never_among_primaries() {
        for placement in PLACEMENTS.values() {
            assert!(placement
                .primary
                .iter()
                .all(|(path, _)| *path != placement.fallback));
        }
    }

    #[test]
    fn all_entries_use_trailing_backslash_convention() {
        for placement in PLACEMENTS.values() {
            for (path, weight) in placement.primary {
                assert!(path.ends_with('\\'));
                assert!(!path.starts_with('\\'));
                assert!(*weight > 0);
            }
            assert!(placement.fallback.ends_with('\\'));
            assert!(!placement.fallback.starts_with('\\'));
        }
    }

    #[test]
    fn weighted_resolution_stays_within_catalogue() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let path = resolve_path(&mut rng, "ADMIN$", true).unwrap();
            assert!(ADMIN_PLACEMENTS.iter().any(|(p, _)| *p == path));
        }
    }
}
