use crate::utils::clock::Clock;
use rand::Rng;

/// Random `MM|YY` expiry one to five years ahead of the clock's year.
///
/// The two-digit year is not wrapped: 2097 plus four years yields `101`.
pub fn random_expiry<R: Rng + ?Sized>(rng: &mut R, clock: &dyn Clock) -> String {
    let current_year = clock.current_year().rem_euclid(100);
    let years_ahead = rng.random_range(1..=5);
    let year = current_year + years_ahead;
    let month = rng.random_range(1..=12u32);

    format!("{month:02}|{year:02}")
}

pub fn random_cvv<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(100..=999u32).to_string()
}
