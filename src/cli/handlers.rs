// src/cli/handlers.rs
use std::io::Write;
use rand::Rng;
use crate::core::config::Config;
use crate::generators::password::validate_length;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::GenerationOptions;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Handler for the `generate` command
pub fn handle_generate<R: Rng, W: Write>(
    generator: &mut PasswordGenerator<R>,
    config: &Config,
    length: Option<i64>,
    has_symbol: bool,
    count: usize,
    out: &mut W,
) -> Result<(), CliError> {
    let requested = length
        .unwrap_or_else(|| i64::try_from(config.default_password_length).unwrap_or(i64::MAX));
    let options = GenerationOptions::new(validate_length(requested, config.max_password_length)?, has_symbol);

    for _ in 0..count {
        let password = generator.generate_password(&options)?;
        writeln!(out, "{}", password)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded() -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::new(ChaCha20Rng::seed_from_u64(9))
    }

    #[test]
    fn test_prints_one_password_per_line() {
        let mut out = Vec::new();
        handle_generate(&mut seeded(), &Config::default(), Some(12), false, 3, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 12));
    }

    #[test]
    fn test_uses_configured_default_length() {
        let mut out = Vec::new();
        handle_generate(&mut seeded(), &Config::default(), None, true, 1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim_end_matches('\n').len(), 16);
    }

    #[test]
    fn test_rejects_negative_length() {
        let mut out = Vec::new();
        let err = handle_generate(&mut seeded(), &Config::default(), Some(-2), false, 1, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Generator(GeneratorError::NegativeLength(-2))));
        assert!(out.is_empty());
    }
}
