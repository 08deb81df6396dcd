use crate::{
    domain::responses::{CardBatch, GeneratedCard},
    errors::GeneratorError,
    utils::{Clock, filler_length, random_card_number, random_cvv, random_expiry},
};
use rand::Rng;
use std::collections::HashSet;

/// Candidate budget per requested card.
pub const ATTEMPTS_PER_CARD: usize = 20;

/// Upper bound on records reserved up front; larger batches grow as they fill.
const MAX_RESERVED: usize = 1024;

/// Capacity to reserve for a batch: never more than the distinct numbers the
/// filler can produce, and never more than `MAX_RESERVED`.
fn capacity_hint(count: usize, filler: usize) -> usize {
    let distinct = u32::try_from(filler)
        .ok()
        .and_then(|digits| 10usize.checked_pow(digits))
        .unwrap_or(usize::MAX);

    count.min(distinct).min(MAX_RESERVED)
}

/// Generates up to `count` distinct Luhn-valid 16-digit numbers starting with `prefix`.
///
/// Stops after `count * ATTEMPTS_PER_CARD` candidates, so a prefix whose filler space
/// holds fewer distinct numbers than `count` yields a short batch instead of an error.
/// Empty `fixed_expiry`/`fixed_cvv` values are treated as absent.
pub fn generate_cards<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &dyn Clock,
    prefix: &str,
    count: usize,
    fixed_expiry: Option<&str>,
    fixed_cvv: Option<&str>,
) -> Result<CardBatch, GeneratorError> {
    let filler = filler_length(prefix)?;
    let fixed_expiry = fixed_expiry.filter(|v| !v.is_empty());
    let fixed_cvv = fixed_cvv.filter(|v| !v.is_empty());

    let max_attempts = count.saturating_mul(ATTEMPTS_PER_CARD);
    let reserved = capacity_hint(count, filler);
    let mut seen = HashSet::with_capacity(reserved);
    let mut records = Vec::with_capacity(reserved);
    let mut attempts = 0;

    while records.len() < count && attempts < max_attempts {
        attempts += 1;

        let number = random_card_number(rng, prefix, filler);
        if !seen.insert(number.clone()) {
            continue;
        }

        let expiry = match fixed_expiry {
            Some(expiry) => expiry.to_string(),
            None => random_expiry(rng, clock),
        };
        let cvv = match fixed_cvv {
            Some(cvv) => cvv.to_string(),
            None => random_cvv(rng),
        };

        records.push(GeneratedCard {
            number,
            expiry,
            cvv,
        });
    }

    Ok(CardBatch {
        records,
        requested: count,
        attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::responses::BatchStatus,
        utils::{FixedClock, is_luhn_valid},
    };
    use rand::{SeedableRng, rngs::StdRng};

    const CLOCK: FixedClock = FixedClock(2026);

    fn assert_distinct(batch: &CardBatch) {
        let unique: HashSet<_> = batch.records.iter().map(|c| &c.number).collect();
        assert_eq!(unique.len(), batch.records.len(), "numbers must be distinct");
    }

    #[test]
    fn generates_requested_count_for_six_digit_prefix() {
        let mut rng = StdRng::seed_from_u64(1);

        let batch = generate_cards(&mut rng, &CLOCK, "453201", 10, None, None).unwrap();

        assert_eq!(batch.len(), 10);
        assert_eq!(batch.status(), BatchStatus::Complete);
        assert_distinct(&batch);

        for card in &batch.records {
            assert_eq!(card.number.len(), 16);
            assert!(card.number.starts_with("453201"));
            assert!(is_luhn_valid(&card.number));
            assert_eq!(card.cvv.len(), 3);
            assert_eq!(card.expiry.len(), 5);
        }
    }

    #[test]
    fn pins_fixed_fields_on_every_record() {
        let mut rng = StdRng::seed_from_u64(2);

        let batch =
            generate_cards(&mut rng, &CLOCK, "45320100", 50, Some("05|28"), Some("123")).unwrap();

        assert_eq!(batch.len(), 50);
        assert_distinct(&batch);
        assert!(
            batch
                .records
                .iter()
                .all(|c| c.expiry == "05|28" && c.cvv == "123")
        );
    }

    #[test]
    fn empty_fixed_fields_are_randomized() {
        let mut rng = StdRng::seed_from_u64(3);

        let batch = generate_cards(&mut rng, &CLOCK, "5425233", 40, Some(""), Some("")).unwrap();

        assert_eq!(batch.len(), 40);
        assert!(batch.records.iter().any(|c| c.cvv != batch.records[0].cvv));
    }

    #[test]
    fn pins_only_the_supplied_field() {
        let mut rng = StdRng::seed_from_u64(4);

        let batch = generate_cards(&mut rng, &CLOCK, "453201", 20, None, Some("777")).unwrap();

        assert!(batch.records.iter().all(|c| c.cvv == "777"));
        assert!(batch.records.iter().all(|c| c.expiry.contains('|')));
    }

    #[test]
    fn small_filler_space_yields_short_batch() {
        let mut rng = StdRng::seed_from_u64(5);

        // One filler digit leaves ten possible numbers.
        let batch = generate_cards(&mut rng, &CLOCK, "45320100453201", 25, None, None).unwrap();

        assert_eq!(batch.len(), 10);
        assert_eq!(batch.status(), BatchStatus::Partial);
        assert_eq!(batch.attempts, 25 * ATTEMPTS_PER_CARD);
        assert_distinct(&batch);
    }

    #[test]
    fn attempt_budget_bounds_work() {
        let mut rng = StdRng::seed_from_u64(6);

        let batch = generate_cards(&mut rng, &CLOCK, "453201004532010", 3, None, None).unwrap();

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.records[0].number, "4532010045320106");
        assert_eq!(batch.attempts, 3 * ATTEMPTS_PER_CARD);
    }

    #[test]
    fn reservation_is_bounded_by_filler_space() {
        assert_eq!(capacity_hint(usize::MAX / 16, 0), 1);
        assert_eq!(capacity_hint(usize::MAX, 1), 10);
        assert_eq!(capacity_hint(50_000_000, 9), MAX_RESERVED);
        assert_eq!(capacity_hint(usize::MAX, 15), MAX_RESERVED);
        assert_eq!(capacity_hint(7, 9), 7);
        assert_eq!(capacity_hint(0, 9), 0);
    }

    #[test]
    fn oversized_count_with_single_number_space_stays_small() {
        let mut rng = StdRng::seed_from_u64(10);

        let batch =
            generate_cards(&mut rng, &CLOCK, "453201004532010", 5_000, None, None).unwrap();

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.status(), BatchStatus::Partial);
        assert_eq!(batch.attempts, 5_000 * ATTEMPTS_PER_CARD);
        assert!(batch.records.capacity() <= MAX_RESERVED);
    }

    #[test]
    fn zero_count_returns_empty_batch() {
        let mut rng = StdRng::seed_from_u64(7);

        let batch = generate_cards(&mut rng, &CLOCK, "453201", 0, None, None).unwrap();

        assert!(batch.is_empty());
        assert_eq!(batch.attempts, 0);
    }

    #[test]
    fn rejects_prefix_that_cannot_fit() {
        let mut rng = StdRng::seed_from_u64(8);

        let err = generate_cards(&mut rng, &CLOCK, "4532010045320100", 5, None, None).unwrap_err();

        assert_eq!(
            err,
            GeneratorError::InvalidPrefixLength { length: 16, max: 15 }
        );
    }

    #[test]
    fn same_seed_gives_same_batch() {
        let first =
            generate_cards(&mut StdRng::seed_from_u64(9), &CLOCK, "453201", 5, None, None).unwrap();
        let second =
            generate_cards(&mut StdRng::seed_from_u64(9), &CLOCK, "453201", 5, None, None).unwrap();

        assert_eq!(first.records, second.records);
    }
}
