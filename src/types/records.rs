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

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::types::mastery::MasteryState;
use crate::types::timestamp::Timestamp;

/// Full lesson-progress mapping, keyed by lesson id. A `BTreeMap` so
/// iteration order is deterministic.
pub type LessonProgressMap = BTreeMap<String, LessonProgressRecord>;

/// Full drill-performance mapping, keyed by drill id.
pub type DrillPerformanceMap = BTreeMap<String, DrillPerformanceRecord>;

/// Durable per-lesson progress. Created lazily on first interaction,
/// never deleted.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgressRecord {
    pub state: MasteryState,
    pub completed_drills: u32,
    pub total_drills: u32,
    pub last_score_pct: u8,
    pub last_updated: Timestamp,
}

impl LessonProgressRecord {
    /// The defaults a record is created with when a lesson is first touched.
    pub fn new_available(now: Timestamp) -> Self {
        Self {
            state: MasteryState::Available,
            completed_drills: 0,
            total_drills: 0,
            last_score_pct: 0,
            last_updated: now,
        }
    }
}

/// Partial update merged into a lesson record. Absent fields keep their
/// stored values.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LessonProgressPatch {
    pub state: Option<MasteryState>,
    pub completed_drills: Option<u32>,
    pub total_drills: Option<u32>,
    pub last_score_pct: Option<u8>,
}

/// Durable per-drill answer tally. Counters only ever increase; this is
/// the substrate the weak-item scheduler ranks over.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillPerformanceRecord {
    pub correct_count: u32,
    pub incorrect_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_answer_at: Option<Timestamp>,
}
