mod bin;
mod card;

pub use self::bin::BinLookupRequest;
pub use self::card::GenerateCardsRequest;
