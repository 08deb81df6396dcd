mod lookup;

pub use self::lookup::BinService;
