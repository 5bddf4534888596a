use super::schema::Config;

const MAX_DECIMALS: usize = 6;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.pass_mark < 0 {
        errors.push("pass_mark: must be non-negative".to_string());
    }

    if config.distinction.mark < 0 {
        errors.push("distinction.mark: must be non-negative".to_string());
    }

    match config.distinction.subjects.as_slice() {
        [first, second] if first == second => {
            errors.push(format!("distinction.subjects: '{}' listed twice", first));
        }
        [_, _] => {}
        other => {
            errors.push(format!(
                "distinction.subjects: expected exactly 2 subjects, got {}",
                other.len()
            ));
        }
    }

    if config.decimals > MAX_DECIMALS {
        errors.push(format!(
            "decimals: must be at most {}, got {}",
            MAX_DECIMALS, config.decimals
        ));
    }

    if let Some(ref weights) = config.weights {
        for (i, w) in weights.iter().enumerate() {
            if !w.is_finite() || *w < 0.0 {
                errors.push(format!("weights[{}]: must be a non-negative number, got {}", i, w));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
