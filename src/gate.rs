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

use crate::catalog::Catalog;
use crate::types::level::PlacementLevel;
use crate::types::mastery::MasteryState;
use crate::types::records::LessonProgressMap;

/// Whether the given content tier is accessible to the learner.
///
/// A `PreA0` placement is a hard floor: the learner works through the
/// foundational track before anything else opens, stored progress
/// notwithstanding. For everyone else the two lowest tiers are free, a
/// placement at or above the tier exempts it from sequential gating, and
/// any other tier opens once every lesson of the preceding tier is
/// mastered. A preceding tier the catalog does not know yields "locked".
pub fn is_level_unlocked<C: Catalog + ?Sized>(
    level: PlacementLevel,
    placement: PlacementLevel,
    progress: &LessonProgressMap,
    catalog: &C,
) -> bool {
    if placement == PlacementLevel::PreA0 {
        return level == PlacementLevel::PreA0;
    }
    if level == PlacementLevel::PreA0 || level == PlacementLevel::A0 {
        return true;
    }
    if placement >= level {
        return true;
    }
    let preceding = match level.preceding() {
        Some(preceding) => preceding,
        None => return false,
    };
    let group = match catalog.tier(preceding) {
        Some(group) => group,
        None => return false,
    };
    all_mastered(&group.lesson_ids, progress)
}

/// Whether the foundational track is done: every `PreA0` lesson mastered,
/// vacuously true when the tier has no lessons (or is absent entirely).
pub fn is_pre_a0_completed<C: Catalog + ?Sized>(
    progress: &LessonProgressMap,
    catalog: &C,
) -> bool {
    match catalog.tier(PlacementLevel::PreA0) {
        Some(group) => all_mastered(&group.lesson_ids, progress),
        None => true,
    }
}

fn all_mastered(lesson_ids: &[String], progress: &LessonProgressMap) -> bool {
    lesson_ids.iter().all(|id| {
        progress
            .get(id)
            .map(|record| record.state == MasteryState::Mastered)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::types::records::LessonProgressRecord;
    use crate::types::timestamp::Timestamp;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_tier(
                PlacementLevel::PreA0,
                "Foundations",
                vec!["p1".to_string(), "p2".to_string()],
            )
            .with_tier(
                PlacementLevel::A0,
                "Beginner",
                vec!["a1".to_string(), "a2".to_string()],
            )
            .with_tier(PlacementLevel::A1, "Elementary", vec!["b1".to_string()])
    }

    fn mastered(lesson_ids: &[&str]) -> LessonProgressMap {
        let now = Timestamp::new(Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap());
        lesson_ids
            .iter()
            .map(|id| {
                let record = LessonProgressRecord {
                    state: MasteryState::Mastered,
                    completed_drills: 5,
                    total_drills: 5,
                    last_score_pct: 100,
                    last_updated: now,
                };
                (id.to_string(), record)
            })
            .collect()
    }

    #[test]
    fn test_placement_exemption_ignores_progress() {
        let progress = LessonProgressMap::new();
        assert!(is_level_unlocked(
            PlacementLevel::B1,
            PlacementLevel::C1,
            &progress,
            &catalog()
        ));
    }

    #[test]
    fn test_floor_tiers_always_unlocked() {
        let progress = LessonProgressMap::new();
        assert!(is_level_unlocked(
            PlacementLevel::A0,
            PlacementLevel::A0,
            &progress,
            &catalog()
        ));
        assert!(is_level_unlocked(
            PlacementLevel::PreA0,
            PlacementLevel::Unknown,
            &progress,
            &catalog()
        ));
    }

    #[test]
    fn test_next_tier_locked_until_previous_mastered() {
        let progress = LessonProgressMap::new();
        assert!(!is_level_unlocked(
            PlacementLevel::A1,
            PlacementLevel::A0,
            &progress,
            &catalog()
        ));
        let progress = mastered(&["a1", "a2"]);
        assert!(is_level_unlocked(
            PlacementLevel::A1,
            PlacementLevel::A0,
            &progress,
            &catalog()
        ));
    }

    #[test]
    fn test_partially_mastered_tier_does_not_unlock() {
        let progress = mastered(&["a1"]);
        assert!(!is_level_unlocked(
            PlacementLevel::A1,
            PlacementLevel::A0,
            &progress,
            &catalog()
        ));
    }

    #[test]
    fn test_pre_a0_placement_is_a_hard_floor() {
        let progress = mastered(&["p1", "p2", "a1", "a2", "b1"]);
        assert!(is_level_unlocked(
            PlacementLevel::PreA0,
            PlacementLevel::PreA0,
            &progress,
            &catalog()
        ));
        for level in [PlacementLevel::A0, PlacementLevel::A1, PlacementLevel::B2] {
            assert!(!is_level_unlocked(
                level,
                PlacementLevel::PreA0,
                &progress,
                &catalog()
            ));
        }
    }

    #[test]
    fn test_unknown_preceding_tier_fails_safe() {
        // The catalog has no B1 tier, so B2 cannot verify its prerequisite.
        let progress = mastered(&["a1", "a2", "b1"]);
        assert!(!is_level_unlocked(
            PlacementLevel::B2,
            PlacementLevel::A0,
            &progress,
            &catalog()
        ));
    }

    #[test]
    fn test_pre_a0_completed() {
        assert!(!is_pre_a0_completed(&LessonProgressMap::new(), &catalog()));
        assert!(!is_pre_a0_completed(&mastered(&["p1"]), &catalog()));
        assert!(is_pre_a0_completed(&mastered(&["p1", "p2"]), &catalog()));
    }

    #[test]
    fn test_pre_a0_vacuously_complete() {
        let empty_tier =
            StaticCatalog::new().with_tier(PlacementLevel::PreA0, "Foundations", Vec::new());
        assert!(is_pre_a0_completed(&LessonProgressMap::new(), &empty_tier));
        let no_tier = StaticCatalog::new();
        assert!(is_pre_a0_completed(&LessonProgressMap::new(), &no_tier));
    }
}
