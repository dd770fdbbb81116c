use crate::models::bucket::Bucket;
use serde::Serialize;

/// One logged travel segment.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Activity {
    pub mode: Option<String>,
    /// Whole minutes.
    pub duration: i64,
    pub distance: f64,
}

impl Activity {
    pub fn new(mode: Option<&str>, duration: i64, distance: f64) -> Self {
        Self {
            mode: mode.map(str::to_string),
            duration,
            distance,
        }
    }

    pub fn bucket(&self) -> Bucket {
        self.mode
            .as_deref()
            .map(Bucket::classify)
            .unwrap_or(Bucket::Unclassified)
    }
}
