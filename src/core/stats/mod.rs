//! Per-queue operation counters.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Counts of what a queue has done since construction.
///
/// Always updated together with the queue state it describes, so
/// `enqueued - popped` equals the current length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Values admitted by `push_back`
    pub enqueued: u64,
    /// `push_back` calls rejected because the value was already pending
    pub duplicates: u64,
    /// Values removed by `pop_head`
    pub popped: u64,
    /// `pop_head` calls that found the queue empty
    pub empty_pops: u64,
}

impl QueueStats {
    /// Values admitted but not yet popped
    pub fn pending(&self) -> u64 {
        self.enqueued.saturating_sub(self.popped)
    }

    /// Total `push_back` calls, admitted or not
    pub fn submissions(&self) -> u64 {
        self.enqueued + self.duplicates
    }

    /// Render as a single JSON line
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Display for QueueStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "QueueStats {{ enqueued: {}, duplicates: {}, popped: {}, empty_pops: {} }}",
            self.enqueued, self.duplicates, self.popped, self.empty_pops,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_and_submissions() {
        let stats = QueueStats {
            enqueued: 5,
            duplicates: 3,
            popped: 2,
            empty_pops: 1,
        };
        assert_eq!(stats.pending(), 3);
        assert_eq!(stats.submissions(), 8);
    }

    #[test]
    fn renders_json_line() {
        let stats = QueueStats {
            enqueued: 2,
            duplicates: 1,
            popped: 0,
            empty_pops: 0,
        };
        let json = stats.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"enqueued":2,"duplicates":1,"popped":0,"empty_pops":0}"#
        );
        let back: QueueStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn display_names_every_counter() {
        let text = QueueStats::default().to_string();
        assert_eq!(
            text,
            "QueueStats { enqueued: 0, duplicates: 0, popped: 0, empty_pops: 0 }"
        );
    }
}
