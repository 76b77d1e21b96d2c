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
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::error::Fallible;

/// Fixed namespace for every key this crate writes, so a bulk clear can
/// target this app's data and nothing else.
pub const APP_PREFIX: &str = "lexidrill:";

pub fn profile_key() -> String {
    format!("{APP_PREFIX}profile")
}

pub fn lesson_progress_key() -> String {
    format!("{APP_PREFIX}lessonProgress")
}

pub fn drill_performance_key() -> String {
    format!("{APP_PREFIX}drillPerformance")
}

/// The persistence boundary: a string-keyed store of JSON blobs. The core
/// is agnostic to what implements it; `SqliteStore` is the shipped durable
/// adapter and `MemoryStore` backs tests and throwaway embeddings.
pub trait KvStore {
    fn get(&self, key: &str) -> Fallible<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Fallible<()>;
    fn delete(&self, key: &str) -> Fallible<()>;
    /// Remove every key starting with `prefix`.
    fn clear_prefix(&self, prefix: &str) -> Fallible<()>;
}

/// A `KvStore` that lives and dies with the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn acquire(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        Ok(self.acquire().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Fallible<()> {
        self.acquire().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Fallible<()> {
        self.acquire().remove(key);
        Ok(())
    }

    fn clear_prefix(&self, prefix: &str) -> Fallible<()> {
        let mut entries = self.acquire();
        entries.retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}
