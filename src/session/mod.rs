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

pub mod eval;
mod state;

pub use state::LearningItem;
pub use state::LearningSession;
pub use state::SessionMode;
pub use state::SessionRequest;
pub use state::SessionStats;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Fallible;
use crate::kv::KvStore;
use crate::ledger::Ledger;
use crate::scheduler::weak_drill_ids;
use crate::session::eval::evaluate;
use crate::session::eval::expected_display;
use crate::store::ProgressStore;
use crate::types::content::Answer;
use crate::types::content::DrillContent;
use crate::types::content::DrillKind;
use crate::types::mastery::ItemMastery;
use crate::types::mastery::MasteryState;
use crate::types::profile::LearnerProfile;
use crate::types::records::LessonProgressPatch;
use crate::types::timestamp::Timestamp;

/// Drill id of the degenerate fallback item. Never written to the
/// performance map.
const PLACEHOLDER_DRILL_ID: &str = "placeholder";

/// What the engine hands back after each submission.
#[derive(Clone, PartialEq, Debug)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub feedback: String,
    pub xp_awarded: u64,
    /// The submitted item's new mastery tag. `None` when the session was
    /// already exhausted and nothing happened.
    pub item_state: Option<ItemMastery>,
}

impl AnswerOutcome {
    fn terminal() -> Self {
        Self {
            correct: false,
            feedback: "The session is already complete.".to_string(),
            xp_awarded: 0,
            item_state: None,
        }
    }
}

/// Orchestrates one learning session: item selection, answer evaluation,
/// and the final commit into durable learner state.
///
/// The engine holds no session state itself; sessions are values the
/// caller passes through each call.
pub struct SessionEngine<'a, S: KvStore, C: Catalog + ?Sized> {
    store: &'a ProgressStore<S>,
    catalog: &'a C,
    config: Config,
}

impl<'a, S: KvStore, C: Catalog + ?Sized> SessionEngine<'a, S, C> {
    pub fn new(store: &'a ProgressStore<S>, catalog: &'a C, config: Config) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    /// Build a session for the request.
    ///
    /// An unknown (or missing) lesson id yields a session with no items:
    /// callers check `items.is_empty()` instead of catching anything. A
    /// review request with nothing weak on file does the same, and that is
    /// a valid terminal state rather than a failure.
    pub fn start_session(
        &self,
        request: SessionRequest,
        now: Timestamp,
    ) -> Fallible<LearningSession> {
        match request.mode {
            SessionMode::NewLesson => {
                let lesson_id = request.lesson_id;
                let items = match lesson_id
                    .as_deref()
                    .and_then(|id| self.catalog.lesson_drills(id))
                {
                    Some(drills) => drills
                        .into_iter()
                        .map(|entry| LearningItem {
                            drill_id: entry.id,
                            content: entry.content,
                            mastery: ItemMastery::New,
                        })
                        .collect(),
                    None => {
                        log::debug!("unknown lesson {lesson_id:?}, starting empty session");
                        Vec::new()
                    }
                };
                Ok(LearningSession::new(
                    SessionMode::NewLesson,
                    lesson_id,
                    items,
                    now,
                ))
            }
            SessionMode::Review => {
                let limit = request.limit.unwrap_or(self.config.review_limit);
                let performance = self.store.load_performance()?.or_default();
                let mut items = Vec::new();
                for drill_id in weak_drill_ids(&performance, now, limit) {
                    match self.catalog.drill(&drill_id) {
                        Some(content) => items.push(LearningItem {
                            drill_id,
                            content,
                            mastery: ItemMastery::Review,
                        }),
                        None => {
                            log::debug!("weak drill {drill_id} not in catalog, skipping");
                        }
                    }
                }
                Ok(LearningSession::new(SessionMode::Review, None, items, now))
            }
            SessionMode::Placement => {
                // Placement tests are served by their own flow outside the
                // core; this fallback keeps an unexpected request alive
                // instead of crashing it.
                log::debug!("unsupported session mode, serving placeholder item");
                let items = vec![placeholder_item()];
                Ok(LearningSession::new(
                    SessionMode::Placement,
                    None,
                    items,
                    now,
                ))
            }
        }
    }

    /// Evaluate the submission against the item under the cursor.
    ///
    /// On a real item this tags the item, updates the running stats,
    /// persists the drill outcome right away, advances the cursor, and
    /// returns the updated session snapshot with the outcome. Past the end
    /// it returns a terminal no-op outcome and the session untouched.
    pub fn submit_answer(
        &self,
        mut session: LearningSession,
        answer: &Answer,
        now: Timestamp,
    ) -> Fallible<(LearningSession, AnswerOutcome)> {
        if session.is_exhausted() {
            return Ok((session, AnswerOutcome::terminal()));
        }
        let index = session.current_index;
        let item = &session.items[index];

        let correct = evaluate(&item.content, answer);
        let feedback = if correct {
            "Correct!".to_string()
        } else {
            format!("Not quite. Expected: {}", expected_display(&item.content))
        };
        let drill_id = item.drill_id.clone();
        let item_state = if correct {
            ItemMastery::Mastered
        } else {
            ItemMastery::Learning
        };
        session.items[index].mastery = item_state;

        let xp_awarded = if correct {
            u64::from(self.config.xp_per_correct)
        } else {
            0
        };
        if correct {
            session.stats.correct += 1;
        } else {
            session.stats.incorrect += 1;
        }
        session.stats.xp_gained += xp_awarded;

        if drill_id != PLACEHOLDER_DRILL_ID {
            self.store.record_drill_result(&drill_id, correct, now)?;
        }

        session.current_index += 1;
        let outcome = AnswerOutcome {
            correct,
            feedback,
            xp_awarded,
            item_state: Some(item_state),
        };
        Ok((session, outcome))
    }

    /// Crystallize the session into durable learner state: fold the result
    /// into the lesson's progress record, then apply XP and the daily
    /// streak when anything was earned. Returns the refreshed profile, or
    /// `None` when no profile exists yet.
    ///
    /// A second commit of the same session is a no-op that returns the
    /// current profile.
    pub fn commit_session(
        &self,
        session: &mut LearningSession,
        now: Timestamp,
    ) -> Fallible<Option<LearnerProfile>> {
        if session.committed {
            log::warn!("session {} already committed", session.id);
            return Ok(self.store.load_profile()?.into_option());
        }
        session.committed = true;

        if session.mode == SessionMode::NewLesson && session.answered() > 0 {
            if let Some(lesson_id) = session.lesson_id.clone() {
                self.fold_lesson_progress(session, &lesson_id, now)?;
            }
        }

        if session.stats.xp_gained > 0 {
            let ledger = Ledger::new(self.store);
            ledger.add_xp(session.stats.xp_gained)?;
            ledger.update_streak_on_activity(now)
        } else {
            Ok(self.store.load_profile()?.into_option())
        }
    }

    fn fold_lesson_progress(
        &self,
        session: &LearningSession,
        lesson_id: &str,
        now: Timestamp,
    ) -> Fallible<()> {
        let answered = session.answered();
        let total = session.items.len() as u32;
        let score = ((session.stats.correct * 100) / answered) as u8;
        let state = if answered == total && score >= self.config.mastery_threshold_pct {
            MasteryState::Mastered
        } else {
            MasteryState::InProgress
        };
        let patch = LessonProgressPatch {
            state: Some(state),
            completed_drills: Some(answered.min(total)),
            total_drills: Some(total),
            last_score_pct: Some(score),
        };
        self.store.update_lesson_progress(lesson_id, patch, now)?;
        Ok(())
    }
}

fn placeholder_item() -> LearningItem {
    LearningItem {
        drill_id: PLACEHOLDER_DRILL_ID.to_string(),
        content: DrillContent::grammar(
            DrillKind::FillIn,
            "More practice is on the way. Type \"ok\" to continue.",
            vec!["ok".to_string()],
        ),
        mastery: ItemMastery::New,
    }
}
