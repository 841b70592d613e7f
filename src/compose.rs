use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::MorphError;

/// Token supplier bound to one placeholder name.
pub type TokenFn = fn(&mut dyn RngCore) -> String;

/// Pick one template uniformly and substitute its placeholders.
///
/// Placeholders are written `{name}` or `{name:0N}` (zero-padded numeric
/// width). A placeholder is sampled once per composition; repeated
/// occurrences in the same template reuse the sampled value.
pub fn compose(
    rng: &mut dyn RngCore,
    templates: &[&str],
    bindings: &[(&str, TokenFn)],
) -> Result<String, MorphError> {
    let template = *templates
        .choose(rng)
        .ok_or_else(|| MorphError::Configuration("empty template list".to_string()))?;

    let mut sampled: Vec<(&str, String)> = Vec::new();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            MorphError::Configuration(format!("unterminated placeholder in '{}'", template))
        })?;
        let inner = &after[..close];
        let (name, spec) = match inner.split_once(':') {
            Some((name, spec)) => (name, Some(spec)),
            None => (inner, None),
        };

        let supplier = bindings
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, supplier)| *supplier)
            .ok_or_else(|| {
                MorphError::Configuration(format!(
                    "template '{}' references undeclared placeholder '{}'",
                    template, name
                ))
            })?;

        let value = match sampled.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => value.clone(),
            None => {
                let value = supplier(rng);
                sampled.push((name, value.clone()));
                value
            }
        };

        match spec {
            Some(spec) => out.push_str(&zero_pad(name, spec, &value)?),
            None => out.push_str(&value),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

/// The only supported format spec: `0N`, zero-pad a numeric token to width N.
fn zero_pad(name: &str, spec: &str, value: &str) -> Result<String, MorphError> {
    let width: usize = spec
        .strip_prefix('0')
        .filter(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| {
            MorphError::Configuration(format!(
                "unsupported format spec '{}' on placeholder '{}'",
                spec, name
            ))
        })?;
    let numeric: u64 = value.parse().map_err(|_| {
        MorphError::Configuration(format!(
            "placeholder '{}' value '{}' is not numeric",
            name, value
        ))
    })?;
    Ok(format!("{:0w$}", numeric, w = width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn digits(rng: &mut dyn RngCore) -> String {
        rng.gen_range(0u32..10_000).to_string()
    }

    fn word(_rng: &mut dyn RngCore) -> String {
        "svc".to_string()
    }

    #[test]
    fn substitutes_bound_placeholders() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = compose(&mut rng, &["pre_{name}"], &[("name", word)]).unwrap();
        assert_eq!(out, "pre_svc");
    }

    #[test]
    fn repeated_placeholder_sampled_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = compose(&mut rng, &["{n:04}{n:04}"], &[("n", digits)]).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(out[..4], out[4..]);
    }

    #[test]
    fn zero_pad_spec_applies_width() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = compose(&mut rng, &["{n:06}"], &[("n", digits)]).unwrap();
        assert_eq!(out.len(), 6);
        assert!(out.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_template_list_is_configuration_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = compose(&mut rng, &[], &[("n", digits)]).unwrap_err();
        assert!(matches!(err, MorphError::Configuration(_)));
    }

    #[test]
    fn undeclared_placeholder_is_configuration_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = compose(&mut rng, &["{missing}"], &[("n", digits)]).unwrap_err();
        assert!(matches!(err, MorphError::Configuration(_)));
    }

    #[test]
    fn non_numeric_token_under_pad_spec_is_configuration_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = compose(&mut rng, &["{name:04}"], &[("name", word)]).unwrap_err();
        assert!(matches!(err, MorphError::Configuration(_)));
    }

    #[test]
    fn unterminated_placeholder_is_configuration_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = compose(&mut rng, &["{name"], &[("name", word)]).unwrap_err();
        assert!(matches!(err, MorphError::Configuration(_)));
    }

    #[test]
    fn literal_text_passes_through() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = compose(&mut rng, &["plain"], &[]).unwrap();
        assert_eq!(out, "plain");
    }
}
