use chrono::{Datelike, Local};
use std::sync::Arc;

pub trait Clock {
    fn current_year(&self) -> i32;
}

pub type DynClock = Arc<dyn Clock + Send + Sync>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
