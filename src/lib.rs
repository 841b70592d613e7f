//! Polymorphic artifact naming and placement engine.
//!
//! Synthesizes plausible Windows artifact names (services, files, tasks,
//! shares), placement paths, and task-scheduler values that blend into
//! legitimate system activity. Pure computation over static vocabularies:
//! this crate performs no file, registry, service, or network operation —
//! the deployment side consumes its output as opaque strings and values.
//!
//! Every generator takes an explicit `&mut dyn RngCore` so callers can pass
//! `rand::thread_rng()` in production and a seeded `StdRng` in tests.

pub mod compose;
pub mod error;
pub mod names;
pub mod placement;
pub mod schedule;
pub mod weighted;

pub use compose::{compose, TokenFn};
pub use error::MorphError;
pub use placement::{resolve_fallback, resolve_path, DEFAULT_FALLBACK};
pub use schedule::{IdleSettings, TaskConfig};
pub use weighted::{select, weighted_bool};
