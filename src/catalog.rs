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

use crate::types::content::DrillContent;
use crate::types::level::PlacementLevel;

/// One drill as the catalog hands it over.
#[derive(Clone, PartialEq, Debug)]
pub struct DrillEntry {
    pub id: String,
    pub content: DrillContent,
}

/// A tier's lesson group and title metadata.
#[derive(Clone, PartialEq, Debug)]
pub struct TierGroup {
    pub title: String,
    pub lesson_ids: Vec<String>,
}

/// Read-only access to the content catalogs. The catalogs themselves live
/// outside the core; the app hands in whatever implementation it has.
pub trait Catalog {
    /// The lesson's drills, in lesson order. `None` for an unknown lesson.
    fn lesson_drills(&self, lesson_id: &str) -> Option<Vec<DrillEntry>>;

    /// Look up a single drill by id.
    fn drill(&self, drill_id: &str) -> Option<DrillContent>;

    /// The tier's lesson group. `None` for a tier the catalog does not
    /// carry.
    fn tier(&self, level: PlacementLevel) -> Option<TierGroup>;
}

/// A `Catalog` over in-memory maps, for tests and embedding callers that
/// load their catalogs up front.
#[derive(Clone, Default)]
pub struct StaticCatalog {
    lessons: BTreeMap<String, Vec<DrillEntry>>,
    drills: BTreeMap<String, DrillContent>,
    tiers: BTreeMap<PlacementLevel, TierGroup>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lesson and its ordered drills. Each drill also becomes
    /// resolvable by id.
    pub fn with_lesson(mut self, lesson_id: impl Into<String>, drills: Vec<DrillEntry>) -> Self {
        for entry in &drills {
            self.drills.insert(entry.id.clone(), entry.content.clone());
        }
        self.lessons.insert(lesson_id.into(), drills);
        self
    }

    pub fn with_tier(
        mut self,
        level: PlacementLevel,
        title: impl Into<String>,
        lesson_ids: Vec<String>,
    ) -> Self {
        self.tiers.insert(
            level,
            TierGroup {
                title: title.into(),
                lesson_ids,
            },
        );
        self
    }
}

impl Catalog for StaticCatalog {
    fn lesson_drills(&self, lesson_id: &str) -> Option<Vec<DrillEntry>> {
        self.lessons.get(lesson_id).cloned()
    }

    fn drill(&self, drill_id: &str) -> Option<DrillContent> {
        self.drills.get(drill_id).cloned()
    }

    fn tier(&self, level: PlacementLevel) -> Option<TierGroup> {
        self.tiers.get(&level).cloned()
    }
}
