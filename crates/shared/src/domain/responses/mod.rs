mod api;
mod bin;
mod card;

pub use self::api::ApiResponse;
pub use self::bin::BinResponse;
pub use self::card::{BatchStatus, CardBatch, GeneratedCard};
