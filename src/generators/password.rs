// src/generators/password.rs
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::models::GenerationOptions;

pub const DEFAULT_LENGTH: usize = 16;

/// Characters that are easily mistaken for one another when read back
/// (`0`/`O`, `1`/`l`/`I`, ...). Never changes at runtime.
pub const SIMILAR_CHARACTERS: ExclusionSet =
    ExclusionSet::new(['<', '>', 'i', 'l', 'o', 'I', '0', '1']);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("system random number error")]
    RandomSelection(u32),

    #[error("Password length must not be negative (got {0})")]
    NegativeLength(i64),

    #[error("Password length must be at most {max} characters (got {requested})")]
    LengthTooLarge { requested: i64, max: usize },
}

/// Fixed set of characters that must never appear in a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionSet([char; 8]);

impl ExclusionSet {
    pub const fn new(chars: [char; 8]) -> Self {
        ExclusionSet(chars)
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

/// Contiguous ASCII ranges a character can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Upper,
    Lower,
    /// `!` through `~`; includes digits and letters as well as punctuation
    Printable,
}

impl CharClass {
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            CharClass::Digit => b'0'..=b'9',
            CharClass::Upper => b'A'..=b'Z',
            CharClass::Lower => b'a'..=b'z',
            CharClass::Printable => b'!'..=b'~',
        }
    }

    #[cfg(test)]
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.range().contains(&(c as u8))
    }

    // 0: digit, 1: uppercase, 2: lowercase
    fn from_selector(selector: u32) -> Result<Self, GeneratorError> {
        match selector {
            0 => Ok(CharClass::Digit),
            1 => Ok(CharClass::Upper),
            2 => Ok(CharClass::Lower),
            other => Err(GeneratorError::RandomSelection(other)),
        }
    }
}

/// Checks a requested length against the configured maximum.
/// Zero is accepted and produces an empty password.
pub fn validate_length(requested: i64, max: usize) -> Result<usize, GeneratorError> {
    if requested < 0 {
        return Err(GeneratorError::NegativeLength(requested));
    }

    match usize::try_from(requested) {
        Ok(length) if length <= max => Ok(length),
        _ => Err(GeneratorError::LengthTooLarge { requested, max }),
    }
}

/// Password generator that draws characters one at a time and redraws
/// anything found in its exclusion set.
pub struct PasswordGenerator<R> {
    rng: R,
    excluded: ExclusionSet,
}

impl PasswordGenerator<ChaCha20Rng> {
    /// Generator with a fresh entropy-seeded RNG, meant to live for one request.
    pub fn from_entropy() -> Self {
        PasswordGenerator::new(ChaCha20Rng::from_entropy())
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn new(rng: R) -> Self {
        PasswordGenerator {
            rng,
            excluded: SIMILAR_CHARACTERS,
        }
    }

    pub fn generate_password(&mut self, options: &GenerationOptions) -> Result<String, GeneratorError> {
        let mut password = String::with_capacity(options.length);

        for _ in 0..options.length {
            let mut c = self.draw(options.has_symbol)?;
            while self.excluded.contains(c) {
                c = self.draw(options.has_symbol)?;
            }
            password.push(c);
        }

        Ok(password)
    }

    fn draw(&mut self, has_symbol: bool) -> Result<char, GeneratorError> {
        let class = if has_symbol {
            CharClass::Printable
        } else {
            self.select_class()?
        };

        Ok(char::from(self.rng.gen_range(class.range())))
    }

    fn select_class(&mut self) -> Result<CharClass, GeneratorError> {
        CharClass::from_selector(self.rng.gen_range(0..3))
    }
}
