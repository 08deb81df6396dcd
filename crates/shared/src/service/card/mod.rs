mod batch;
mod generator;

pub use self::batch::{ATTEMPTS_PER_CARD, generate_cards};
pub use self::generator::CardGeneratorService;
