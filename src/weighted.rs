use rand::{Rng, RngCore};

use crate::error::MorphError;

/// Draw one candidate from `candidates`.
///
/// With `weighted == false` the first-listed candidate is returned
/// deterministically and no randomness is consumed (priority mode). With
/// `weighted == true` a candidate is drawn with probability proportional to
/// its weight: sum the weights, draw uniformly in `[0, total)`, and walk the
/// cumulative ranges (left-closed, right-open).
pub fn select<'a, T>(
    rng: &mut dyn RngCore,
    candidates: &'a [(T, u32)],
    weighted: bool,
) -> Result<&'a T, MorphError> {
    if candidates.is_empty() {
        return Err(MorphError::InvalidArgument(
            "empty candidate set".to_string(),
        ));
    }
    if candidates.iter().any(|(_, weight)| *weight == 0) {
        return Err(MorphError::InvalidArgument(
            "candidate weight must be positive".to_string(),
        ));
    }

    if !weighted {
        return Ok(&candidates[0].0);
    }

    let total: u64 = candidates.iter().map(|(_, weight)| *weight as u64).sum();
    let mut draw = rng.gen_range(0..total);
    for (value, weight) in &candidates[..candidates.len() - 1] {
        if draw < *weight as u64 {
            return Ok(value);
        }
        draw -= *weight as u64;
    }
    Ok(&candidates[candidates.len() - 1].0)
}

/// Weighted coin flip over an explicit true/false weight pair.
pub fn weighted_bool(
    rng: &mut dyn RngCore,
    true_weight: u32,
    false_weight: u32,
) -> Result<bool, MorphError> {
    select(rng, &[(true, true_weight), (false, false_weight)], true).copied()
}
