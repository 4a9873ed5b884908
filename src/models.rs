// src/models.rs
use crate::generators::password::DEFAULT_LENGTH;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    /// Draw from the whole printable ASCII band instead of digits and letters only
    pub has_symbol: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            has_symbol: false,
        }
    }
}

impl GenerationOptions {
    pub fn new(length: usize, has_symbol: bool) -> Self {
        Self { length, has_symbol }
    }
}
