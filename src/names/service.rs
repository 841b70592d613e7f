use rand::RngCore;

use crate::compose::compose;
use crate::error::MorphError;
use crate::names::pick;

// Real Windows service name building blocks.
const VENDORS: &[&str] = &[
    "Microsoft", "Windows", "Intel", "AMD", "NVIDIA", "Adobe", "Realtek",
];
const COMPONENTS: &[&str] = &[
    "Audio",
    "Display",
    "Network",
    "Security",
    "Update",
    "Telemetry",
    "Diagnostic",
    "Performance",
    "Device",
    "Management",
];
const SUFFIXES: &[&str] = &["Service", "Helper", "Manager", "Monitor", "Agent"];

const TEMPLATES: &[&str] = &[
    "{vendor}{component}{suffix}",
    "{vendor}{suffix}",
    "{component}{suffix}",
    "svc{component}",
];

/// Generate a plausible service name (no extension).
pub fn generate(rng: &mut dyn RngCore) -> Result<String, MorphError> {
    compose(
        rng,
        TEMPLATES,
        &[
            ("vendor", |rng| pick(rng, VENDORS)),
            ("component", |rng| pick(rng, COMPONENTS)),
            ("suffix", |rng| pick(rng, SUFFIXES)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_are_non_empty_and_extensionless() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let name = generate(&mut rng).unwrap();
            assert!(!name.is_empty());
            assert!(!name.contains('.'));
        }
    }

    #[test]
    fn names_are_built_from_declared_vocabularies() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let name = generate(&mut rng).unwrap();
            let known = VENDORS
                .iter()
                .chain(COMPONENTS)
                .chain(SUFFIXES)
                .any(|token| name.contains(token));
            assert!(known, "unexpected name {}", name);
        }
    }
}
