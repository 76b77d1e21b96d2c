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

use crate::error::Fallible;
use crate::kv::KvStore;
use crate::store::ProgressStore;
use crate::types::mastery::MasteryState;

/// Read-only rollup of a learner's stored progress, the numbers a profile
/// screen shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerSummary {
    pub drills_answered: u64,
    pub correct_answers: u64,
    pub accuracy_pct: u8,
    pub weak_drill_count: usize,
    pub lessons_started: usize,
    pub lessons_mastered: usize,
}

pub fn build_summary<S: KvStore>(store: &ProgressStore<S>) -> Fallible<LearnerSummary> {
    let performance = store.load_performance()?.or_default();
    let lessons = store.load_lessons()?.or_default();

    let correct_answers: u64 = performance
        .values()
        .map(|r| u64::from(r.correct_count))
        .sum();
    let incorrect_answers: u64 = performance
        .values()
        .map(|r| u64::from(r.incorrect_count))
        .sum();
    let drills_answered = correct_answers + incorrect_answers;
    let accuracy_pct = if drills_answered > 0 {
        ((correct_answers * 100) / drills_answered) as u8
    } else {
        0
    };
    let weak_drill_count = performance
        .values()
        .filter(|r| r.incorrect_count > 0)
        .count();
    let lessons_mastered = lessons
        .values()
        .filter(|r| r.state == MasteryState::Mastered)
        .count();

    Ok(LearnerSummary {
        drills_answered,
        correct_answers,
        accuracy_pct,
        weak_drill_count,
        lessons_started: lessons.len(),
        lessons_mastered,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::kv::MemoryStore;
    use crate::types::mastery::MasteryState;
    use crate::types::records::LessonProgressPatch;
    use crate::types::timestamp::Timestamp;

    fn now() -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_empty_store_summary() -> Fallible<()> {
        let store = ProgressStore::new(MemoryStore::new());
        let summary = build_summary(&store)?;
        assert_eq!(summary.drills_answered, 0);
        assert_eq!(summary.accuracy_pct, 0);
        assert_eq!(summary.weak_drill_count, 0);
        assert_eq!(summary.lessons_started, 0);
        Ok(())
    }

    #[test]
    fn test_summary_totals() -> Fallible<()> {
        let store = ProgressStore::new(MemoryStore::new());
        store.record_drill_result("q1", true, now())?;
        store.record_drill_result("q1", true, now())?;
        store.record_drill_result("q2", false, now())?;
        store.record_drill_result("q3", true, now())?;
        store.update_lesson_progress(
            "l1",
            LessonProgressPatch {
                state: Some(MasteryState::Mastered),
                ..Default::default()
            },
            now(),
        )?;
        store.update_lesson_progress("l2", LessonProgressPatch::default(), now())?;

        let summary = build_summary(&store)?;
        assert_eq!(summary.drills_answered, 4);
        assert_eq!(summary.correct_answers, 3);
        assert_eq!(summary.accuracy_pct, 75);
        assert_eq!(summary.weak_drill_count, 1);
        assert_eq!(summary.lessons_started, 2);
        assert_eq!(summary.lessons_mastered, 1);
        Ok(())
    }

    #[test]
    fn test_camel_case_wire_format() -> Fallible<()> {
        let store = ProgressStore::new(MemoryStore::new());
        let summary = build_summary(&store)?;
        let json = serde_json::to_value(summary).unwrap();
        assert!(json.get("drillsAnswered").is_some());
        assert!(json.get("weakDrillCount").is_some());
        Ok(())
    }
}
