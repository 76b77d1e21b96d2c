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

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::types::level::PlacementLevel;
use crate::types::timestamp::Timestamp;

/// Everything the app knows about a learner across sessions. The caller
/// owns this record; the core only reads the placement level and mutates
/// xp, streak, and the last-active stamp through the ledger.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub display_name: String,
    pub placement_level: PlacementLevel,
    /// Experience points. Never decreases.
    pub xp: u64,
    /// Consecutive active days, day-granular.
    pub streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<Timestamp>,
    #[serde(default)]
    pub stats: LearningStats,
    /// Earned badge identifiers. Insertion order is irrelevant.
    #[serde(default)]
    pub badges: BTreeSet<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    pub words_mastered: u32,
    pub sentences_spoken: u32,
    pub grammar_points_mastered: u32,
}

impl LearnerProfile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            placement_level: PlacementLevel::Unknown,
            xp: 0,
            streak: 0,
            last_active_at: None,
            stats: LearningStats::default(),
            badges: BTreeSet::new(),
        }
    }
}
