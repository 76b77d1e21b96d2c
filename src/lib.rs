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

//! The learning-progression core of a language-learning app.
//!
//! This crate owns session lifecycle, answer evaluation, mastery and
//! progress bookkeeping, level gating, weak-item review scheduling, and
//! the XP/streak ledger. It renders nothing and talks to no network: the
//! content catalogs come in through the [`catalog::Catalog`] trait and
//! durable state goes out through the [`kv::KvStore`] trait.
//!
//! A typical embedding wires the pieces up like this:
//!
//! ```
//! use lexidrill::catalog::StaticCatalog;
//! use lexidrill::config::Config;
//! use lexidrill::kv::MemoryStore;
//! use lexidrill::session::SessionEngine;
//! use lexidrill::session::SessionRequest;
//! use lexidrill::store::ProgressStore;
//! use lexidrill::types::timestamp::Timestamp;
//!
//! let store = ProgressStore::new(MemoryStore::new());
//! let catalog = StaticCatalog::new();
//! let engine = SessionEngine::new(&store, &catalog, Config::default());
//! let session = engine
//!     .start_session(SessionRequest::review(), Timestamp::now())
//!     .unwrap();
//! assert!(session.items.is_empty());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod gate;
pub mod kv;
pub mod ledger;
pub mod scheduler;
pub mod session;
pub mod sqlite;
pub mod store;
pub mod summary;
pub mod types;
