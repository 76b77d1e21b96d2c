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

use crate::error::Fallible;
use crate::kv::KvStore;
use crate::store::ProgressStore;
use crate::types::profile::LearnerProfile;
use crate::types::timestamp::Timestamp;

/// XP accumulation and daily-streak bookkeeping on the learner profile.
/// Invoked by the session engine at commit time; both operations return
/// the persisted profile, or `None` when no profile exists yet.
pub struct Ledger<'a, S: KvStore> {
    store: &'a ProgressStore<S>,
}

impl<'a, S: KvStore> Ledger<'a, S> {
    pub fn new(store: &'a ProgressStore<S>) -> Self {
        Self { store }
    }

    /// Add `amount` to the learner's XP. There is no cap; XP never
    /// decreases.
    pub fn add_xp(&self, amount: u64) -> Fallible<Option<LearnerProfile>> {
        let mut profile = match self.store.load_profile()?.into_option() {
            Some(profile) => profile,
            None => {
                log::debug!("no profile yet, xp not recorded");
                return Ok(None);
            }
        };
        profile.xp += amount;
        self.store.save_profile(&profile)?;
        Ok(Some(profile))
    }

    /// Register activity for streak purposes. Day boundaries come from the
    /// local calendar date, so repeated activity on one day never
    /// double-increments.
    pub fn update_streak_on_activity(&self, now: Timestamp) -> Fallible<Option<LearnerProfile>> {
        let mut profile = match self.store.load_profile()?.into_option() {
            Some(profile) => profile,
            None => {
                log::debug!("no profile yet, streak not updated");
                return Ok(None);
            }
        };
        let today = now.local_date();
        match profile.last_active_at.map(|ts| ts.local_date()) {
            None => {
                profile.streak = 1;
            }
            Some(last_day) => match today.days_since(last_day) {
                0 => {}
                1 => {
                    profile.streak += 1;
                }
                _ => {
                    profile.streak = 1;
                }
            },
        }
        profile.last_active_at = Some(now);
        self.store.save_profile(&profile)?;
        Ok(Some(profile))
    }
}
