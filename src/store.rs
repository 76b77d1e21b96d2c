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

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Fallible;
use crate::kv::APP_PREFIX;
use crate::kv::KvStore;
use crate::kv::drill_performance_key;
use crate::kv::lesson_progress_key;
use crate::kv::profile_key;
use crate::types::profile::LearnerProfile;
use crate::types::records::DrillPerformanceMap;
use crate::types::records::DrillPerformanceRecord;
use crate::types::records::LessonProgressMap;
use crate::types::records::LessonProgressPatch;
use crate::types::records::LessonProgressRecord;
use crate::types::timestamp::Timestamp;

/// Outcome of reading a blob from the store. Distinguishes "nothing was
/// ever written" from "something was written and no longer parses", so
/// callers (and tests) can tell the two apart without log-scraping. Both
/// degrade to the same default at the call site; neither is an error.
#[derive(Clone, PartialEq, Debug)]
pub enum Loaded<T> {
    Value(T),
    Empty,
    Malformed,
}

impl<T> Loaded<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Loaded::Value(value) => Some(value),
            Loaded::Empty | Loaded::Malformed => None,
        }
    }
}

impl<T: Default> Loaded<T> {
    pub fn or_default(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

/// Durable learner state behind an injected key-value backend. Writes are
/// read-modify-write over whole mappings, last writer wins.
pub struct ProgressStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> ProgressStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn load_profile(&self) -> Fallible<Loaded<LearnerProfile>> {
        self.load_blob(&profile_key())
    }

    pub fn save_profile(&self, profile: &LearnerProfile) -> Fallible<()> {
        self.save_blob(&profile_key(), profile)
    }

    pub fn load_lessons(&self) -> Fallible<Loaded<LessonProgressMap>> {
        self.load_blob(&lesson_progress_key())
    }

    pub fn save_lessons(&self, lessons: &LessonProgressMap) -> Fallible<()> {
        self.save_blob(&lesson_progress_key(), lessons)
    }

    pub fn load_performance(&self) -> Fallible<Loaded<DrillPerformanceMap>> {
        self.load_blob(&drill_performance_key())
    }

    pub fn save_performance(&self, performance: &DrillPerformanceMap) -> Fallible<()> {
        self.save_blob(&drill_performance_key(), performance)
    }

    /// Upsert the drill's performance record: bump the matching counter and
    /// stamp the answer time.
    pub fn record_drill_result(
        &self,
        drill_id: &str,
        correct: bool,
        now: Timestamp,
    ) -> Fallible<()> {
        let mut performance = self.load_performance()?.or_default();
        let record = performance
            .entry(drill_id.to_string())
            .or_insert_with(DrillPerformanceRecord::default);
        if correct {
            record.correct_count += 1;
        } else {
            record.incorrect_count += 1;
        }
        record.last_answer_at = Some(now);
        self.save_performance(&performance)
    }

    /// Merge a partial update into the lesson's record, creating it with
    /// defaults if the lesson has never been touched. Returns the merged
    /// record as persisted.
    pub fn update_lesson_progress(
        &self,
        lesson_id: &str,
        patch: LessonProgressPatch,
        now: Timestamp,
    ) -> Fallible<LessonProgressRecord> {
        let mut lessons = self.load_lessons()?.or_default();
        let record = lessons
            .entry(lesson_id.to_string())
            .or_insert_with(|| LessonProgressRecord::new_available(now));
        if let Some(state) = patch.state {
            record.state = state;
        }
        if let Some(completed) = patch.completed_drills {
            record.completed_drills = completed;
        }
        if let Some(total) = patch.total_drills {
            record.total_drills = total;
        }
        if let Some(score) = patch.last_score_pct {
            record.last_score_pct = score;
        }
        record.last_updated = now;
        let merged = record.clone();
        self.save_lessons(&lessons)?;
        Ok(merged)
    }

    /// Drop everything this app has written to the backend.
    pub fn clear(&self) -> Fallible<()> {
        self.kv.clear_prefix(APP_PREFIX)
    }

    fn load_blob<T: DeserializeOwned>(&self, key: &str) -> Fallible<Loaded<T>> {
        match self.kv.get(key)? {
            None => Ok(Loaded::Empty),
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(value) => Ok(Loaded::Value(value)),
                Err(e) => {
                    log::warn!("discarding malformed blob at {key}: {e}");
                    Ok(Loaded::Malformed)
                }
            },
        }
    }

    fn save_blob<T: Serialize>(&self, key: &str, value: &T) -> Fallible<()> {
        let blob = serde_json::to_string(value)?;
        self.kv.put(key, &blob)
    }
}
