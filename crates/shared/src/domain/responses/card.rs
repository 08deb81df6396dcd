use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCard {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl fmt::Display for GeneratedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.number, self.expiry, self.cvv)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Every requested record was produced.
    Complete,
    /// Attempt budget ran out with some records produced.
    Partial,
    /// Attempt budget ran out before any record was produced.
    Exhausted,
}

/// Records from one generation call. Numbers are distinct within a batch.
#[derive(Debug, Clone, Serialize)]
pub struct CardBatch {
    pub records: Vec<GeneratedCard>,
    pub requested: usize,
    pub attempts: usize,
}

impl CardBatch {
    pub fn status(&self) -> BatchStatus {
        if self.records.len() >= self.requested {
            BatchStatus::Complete
        } else if self.records.is_empty() {
            BatchStatus::Exhausted
        } else {
            BatchStatus::Partial
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
