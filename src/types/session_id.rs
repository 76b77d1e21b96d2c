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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::timestamp::Timestamp;

/// Length of the hex prefix kept from the full digest. Plenty for log
/// correlation; sessions are ephemeral and never stored by id.
const SHORT_LEN: usize = 16;

/// Identifier of one learning session, derived by hashing what the session
/// was started from.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SessionId(String);

impl SessionId {
    pub fn derive(mode_tag: &str, lesson_id: Option<&str>, started_at: Timestamp) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(mode_tag.as_bytes());
        if let Some(lesson_id) = lesson_id {
            hasher.update(lesson_id.as_bytes());
        }
        hasher.update(started_at.to_rfc3339().as_bytes());
        let hex = hasher.finalize().to_hex().to_string();
        Self(hex[..SHORT_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
