use crate::{errors::GeneratorError, utils::luhn::complete_checksum};
use rand::Rng;

pub const CARD_NUMBER_LENGTH: usize = 16;

/// Number of random digits between `prefix` and the check digit.
pub fn filler_length(prefix: &str) -> Result<usize, GeneratorError> {
    if let Some(c) = prefix.chars().find(|c| !c.is_ascii_digit()) {
        return Err(GeneratorError::InvalidPrefixDigit(c));
    }

    let max = CARD_NUMBER_LENGTH - 1;

    max.checked_sub(prefix.len())
        .ok_or(GeneratorError::InvalidPrefixLength {
            length: prefix.len(),
            max,
        })
}

pub fn random_card_number<R: Rng + ?Sized>(rng: &mut R, prefix: &str, filler: usize) -> String {
    let random_digits: String = (0..filler)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();

    complete_checksum(&format!("{prefix}{random_digits}"))
}
