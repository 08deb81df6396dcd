/// Appends the Luhn check digit to `partial`.
///
/// Doubling is anchored on the rightmost digit of `partial`, which becomes the
/// second-to-last digit once the check digit lands. Any length is accepted,
/// including the empty string. Non-digit characters must be filtered out by the
/// caller; they are treated as zero.
pub fn complete_checksum(partial: &str) -> String {
    let digits: Vec<u32> = partial.chars().map(|c| c.to_digit(10).unwrap_or(0)).collect();
    let parity = (digits.len() + 1) % 2;

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == parity {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    let check_digit = (10 - (sum % 10)) % 10;

    format!("{partial}{check_digit}")
}

/// Validates a complete number, doubling every second digit from the right.
pub fn is_luhn_valid(number: &str) -> bool {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
