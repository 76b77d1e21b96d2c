// Copyright 2026 The lexidrill developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::Duration;

use crate::types::records::DrillPerformanceMap;
use crate::types::timestamp::Timestamp;

/// Floor for the base weakness score. Keeps every drill with a recorded
/// mistake eligible indefinitely, no matter how often it was answered
/// correctly afterwards.
const MIN_BASE_SCORE: f64 = 0.1;

/// How much each correct answer offsets a recorded mistake.
const CORRECT_DISCOUNT: f64 = 0.3;

/// Answered this recently, a drill sinks in the queue so the learner is
/// not shown the same miss twice in one sitting.
const FRESH_WINDOW_HOURS: i64 = 2;

/// Within a day, still somewhat deprioritized.
const RECENT_WINDOW_HOURS: i64 = 24;

/// Beyond this, the mistake is at risk of being forgotten and gets boosted.
const STALE_WINDOW_HOURS: i64 = 72;

const NO_TIMESTAMP_MULTIPLIER: f64 = 1.5;
const FRESH_MULTIPLIER: f64 = 0.5;
const RECENT_MULTIPLIER: f64 = 0.8;
const STALE_MULTIPLIER: f64 = 1.2;

/// Rank every drill with a recorded mistake, most in need of review first,
/// and return up to `limit` drill ids.
///
/// The ranking is deterministic: equal scores keep the map's key order.
pub fn weak_drill_ids(
    performance: &DrillPerformanceMap,
    now: Timestamp,
    limit: usize,
) -> Vec<String> {
    let mut candidates: Vec<(&String, f64)> = performance
        .iter()
        .filter(|(_, record)| record.incorrect_count > 0)
        .map(|(id, record)| {
            let base = (record.incorrect_count as f64
                - CORRECT_DISCOUNT * record.correct_count as f64)
                .max(MIN_BASE_SCORE);
            let score = base * recency_multiplier(record.last_answer_at, now);
            (id, score)
        })
        .collect();
    // Stable sort: ties stay in key order.
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(limit);
    candidates.into_iter().map(|(id, _)| id.clone()).collect()
}

/// Coarse spaced-repetition proxy: freshly practiced mistakes sink, stale
/// ones resurface. A record with no timestamp is treated as maximally
/// stale.
fn recency_multiplier(last_answer_at: Option<Timestamp>, now: Timestamp) -> f64 {
    let last = match last_answer_at {
        None => return NO_TIMESTAMP_MULTIPLIER,
        Some(last) => last,
    };
    let elapsed = now.since(last);
    if elapsed < Duration::hours(FRESH_WINDOW_HOURS) {
        FRESH_MULTIPLIER
    } else if elapsed < Duration::hours(RECENT_WINDOW_HOURS) {
        RECENT_MULTIPLIER
    } else if elapsed > Duration::hours(STALE_WINDOW_HOURS) {
        STALE_MULTIPLIER
    } else {
        1.0
    }
}
