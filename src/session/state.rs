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

use crate::types::content::DrillContent;
use crate::types::mastery::ItemMastery;
use crate::types::session_id::SessionId;
use crate::types::timestamp::Timestamp;

/// What kind of session the caller wants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionMode {
    NewLesson,
    Review,
    Placement,
}

impl SessionMode {
    pub fn as_str(&self) -> &str {
        match self {
            SessionMode::NewLesson => "new_lesson",
            SessionMode::Review => "review",
            SessionMode::Placement => "placement",
        }
    }
}

/// Parameters for starting a session.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionRequest {
    pub mode: SessionMode,
    pub lesson_id: Option<String>,
    /// Review only: cap on weak items pulled. Engine config default when
    /// absent.
    pub limit: Option<usize>,
}

impl SessionRequest {
    pub fn new_lesson(lesson_id: impl Into<String>) -> Self {
        Self {
            mode: SessionMode::NewLesson,
            lesson_id: Some(lesson_id.into()),
            limit: None,
        }
    }

    pub fn review() -> Self {
        Self {
            mode: SessionMode::Review,
            lesson_id: None,
            limit: None,
        }
    }

    pub fn review_limited(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::review()
        }
    }

    pub fn placement() -> Self {
        Self {
            mode: SessionMode::Placement,
            lesson_id: None,
            limit: None,
        }
    }
}

/// One drill inside a session: id, opaque content, and the session-scoped
/// mastery tag.
#[derive(Clone, PartialEq, Debug)]
pub struct LearningItem {
    pub drill_id: String,
    pub content: DrillContent,
    pub mastery: ItemMastery,
}

/// Running totals for one session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SessionStats {
    pub correct: u32,
    pub incorrect: u32,
    pub xp_gained: u64,
}

/// One bounded run through an ordered set of drills. Ephemeral: only its
/// effects (performance records, lesson record, profile deltas) persist.
///
/// The item order is fixed at creation and the cursor only moves forward.
#[derive(Clone, PartialEq, Debug)]
pub struct LearningSession {
    pub id: SessionId,
    pub mode: SessionMode,
    /// The lesson this session walks, for `NewLesson` sessions.
    pub lesson_id: Option<String>,
    pub items: Vec<LearningItem>,
    pub current_index: usize,
    pub stats: SessionStats,
    pub started_at: Timestamp,
    pub(crate) committed: bool,
}

impl LearningSession {
    pub(crate) fn new(
        mode: SessionMode,
        lesson_id: Option<String>,
        items: Vec<LearningItem>,
        started_at: Timestamp,
    ) -> Self {
        let id = SessionId::derive(mode.as_str(), lesson_id.as_deref(), started_at);
        Self {
            id,
            mode,
            lesson_id,
            items,
            current_index: 0,
            stats: SessionStats::default(),
            started_at,
            committed: false,
        }
    }

    /// The item under the cursor, or `None` once the session is exhausted.
    pub fn current_item(&self) -> Option<&LearningItem> {
        self.items.get(self.current_index)
    }

    /// Whether the cursor has walked past the last item.
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.items.len()
    }

    /// How many items have been answered so far.
    pub fn answered(&self) -> u32 {
        self.stats.correct + self.stats.incorrect
    }
}
