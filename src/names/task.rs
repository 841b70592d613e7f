use rand::RngCore;

use crate::compose::compose;
use crate::error::MorphError;
use crate::names::pick;

// Common scheduled-task naming patterns.
const ACTIONS: &[&str] = &[
    "Update", "Sync", "Check", "Scan", "Verify", "Backup", "Clean", "Monitor",
];
const TARGETS: &[&str] = &[
    "System", "Security", "Network", "Cache", "Registry", "Config", "Logs", "Data",
];

const TEMPLATES: &[&str] = &[
    "{action}{target}",  // UpdateSystem
    "{target}{action}",  // SystemUpdate
    "Scheduled{action}", // ScheduledBackup
    "{action}Task",      // ScanTask
];

/// Generate a plausible scheduled-task name (no extension).
pub fn generate(rng: &mut dyn RngCore) -> Result<String, MorphError> {
    compose(
        rng,
        TEMPLATES,
        &[
            ("action", |rng| pick(rng, ACTIONS)),
            ("target", |rng| pick(rng, TARGETS)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_always_contain_an_action_word() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            let name = generate(&mut rng).unwrap();
            assert!(!name.is_empty());
            assert!(
                ACTIONS.iter().any(|a| name.contains(a)),
                "no action word in {}",
                name
            );
        }
    }
}
