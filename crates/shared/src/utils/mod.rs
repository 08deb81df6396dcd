mod card_fields;
mod clock;
mod gracefull;
mod logs;
mod luhn;
mod mark;
mod metrics;
mod random_card_number;

pub use self::card_fields::{random_cvv, random_expiry};
pub use self::clock::{Clock, DynClock, FixedClock, SystemClock};
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::luhn::{complete_checksum, is_luhn_valid};
pub use self::mark::mask_card_number;
pub use self::metrics::{Metrics, Status, render_registry};
pub use self::random_card_number::{CARD_NUMBER_LENGTH, filler_length, random_card_number};
