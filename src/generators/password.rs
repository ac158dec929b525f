use rand::Rng;

use super::GeneratorError;
use crate::models::GenerationRequest;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Characters eligible for the given request. Letters are always present,
    /// so the alphabet is never empty.
    pub fn alphabet(&self, request: &GenerationRequest) -> Vec<u8> {
        let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + PUNCTUATION.len());

        chars.extend_from_slice(LETTERS);
        if request.include_numbers {
            chars.extend_from_slice(DIGITS);
        }
        if request.include_symbols {
            chars.extend_from_slice(PUNCTUATION);
        }

        chars
    }

    pub fn generate_password(&self, request: &GenerationRequest) -> String {
        self.generate_with_rng(request, &mut rand::thread_rng())
    }

    /// Draw every character independently and uniformly from the alphabet.
    /// No category is guaranteed to show up in the output.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> String {
        let chars = self.alphabet(request);

        (0..request.length())
            .map(|_| chars[rng.gen_range(0..chars.len())] as char)
            .collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the raw arguments and generate a password in one step.
pub fn generate_password(length: i64, include_numbers: bool, include_symbols: bool) -> Result<String, GeneratorError> {
    let request = GenerationRequest::new(length, include_numbers, include_symbols)?;
    Ok(PasswordGenerator::new().generate_password(&request))
}
