use std::collections::HashSet;
use std::sync::Mutex;

use serde::Serialize;

#[derive(Debug, Default)]
struct UsageStats {
    total_requests: u64,
    total_characters: u64,
    // Nothing identifies users yet, so this stays empty.
    unique_users: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    pub total_requests: u64,
    pub total_characters: u64,
    pub average_length: f64,
    pub unique_users: usize,
}

/// Process-lifetime counters for accepted synthesis requests.
#[derive(Debug, Default)]
pub struct UsageAggregator {
    stats: Mutex<UsageStats>,
}

impl UsageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&self, characters: usize) {
        let mut stats = self.stats.lock().unwrap_or_else(|e| e.into_inner());
        stats.total_requests += 1;
        stats.total_characters += characters as u64;
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        let stats = self.stats.lock().unwrap_or_else(|e| e.into_inner());
        UsageSnapshot {
            total_requests: stats.total_requests,
            total_characters: stats.total_characters,
            average_length: stats.total_characters as f64 / stats.total_requests.max(1) as f64,
            unique_users: stats.unique_users.len(),
        }
    }
}
