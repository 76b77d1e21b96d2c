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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use rusqlite::Connection;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::kv::KvStore;

/// A `KvStore` backed by a single-table SQLite database. The connection
/// sits behind a mutex, so a handle is cheap to clone and safe to hand
/// around, though the core still assumes a single driver.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        let conn = Arc::new(Mutex::new(conn));
        Ok(Self { conn })
    }

    fn acquire(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Fallible<Option<String>> {
        let conn = self.acquire();
        let mut stmt = conn.prepare("select value from kv where key = ?;")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str) -> Fallible<()> {
        let conn = self.acquire();
        let sql = "insert into kv (key, value) values (?, ?)
                   on conflict (key) do update set value = excluded.value;";
        conn.execute(sql, (key, value))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Fallible<()> {
        let conn = self.acquire();
        conn.execute("delete from kv where key = ?;", [key])?;
        Ok(())
    }

    fn clear_prefix(&self, prefix: &str) -> Fallible<()> {
        let conn = self.acquire();
        let pattern = format!("{}%", prefix.replace('%', "\\%").replace('_', "\\_"));
        conn.execute(
            "delete from kv where key like ? escape '\\';",
            [pattern.as_str()],
        )?;
        Ok(())
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["kv"], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_round_trip_and_reopen() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("kv.sqlite3");
        let path = path.to_str().unwrap();
        {
            let store = SqliteStore::new(path)?;
            store.put("lexidrill:profile", "{\"xp\":10}")?;
            store.put("lexidrill:profile", "{\"xp\":20}")?;
            assert_eq!(store.get("lexidrill:profile")?.as_deref(), Some("{\"xp\":20}"));
        }
        // Reopen: the schema probe must not reapply, and data must survive.
        let store = SqliteStore::new(path)?;
        assert_eq!(store.get("lexidrill:profile")?.as_deref(), Some("{\"xp\":20}"));
        Ok(())
    }

    #[test]
    fn test_delete_and_clear_prefix() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("kv.sqlite3");
        let store = SqliteStore::new(path.to_str().unwrap())?;
        store.put("lexidrill:a", "1")?;
        store.put("lexidrill:b", "2")?;
        store.put("other:c", "3")?;
        store.delete("lexidrill:a")?;
        assert_eq!(store.get("lexidrill:a")?, None);
        store.clear_prefix("lexidrill:")?;
        assert_eq!(store.get("lexidrill:b")?, None);
        assert_eq!(store.get("other:c")?.as_deref(), Some("3"));
        Ok(())
    }

    #[test]
    fn test_missing_key_is_none() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("kv.sqlite3");
        let store = SqliteStore::new(path.to_str().unwrap())?;
        assert_eq!(store.get("lexidrill:absent")?, None);
        Ok(())
    }
}
