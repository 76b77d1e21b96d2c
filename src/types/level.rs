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

use serde::Deserialize;
use serde::Serialize;

/// A proficiency band. Doubles as a learner's placement level (which may be
/// `Unknown`) and as a content tier identifier (which never is).
///
/// The derived ordering is the gating order: `PreA0 < A0 < ... < C2`, with
/// `Unknown` below everything so an unplaced learner is never exempted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementLevel {
    Unknown,
    PreA0,
    A0,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl PlacementLevel {
    pub fn as_str(&self) -> &str {
        match self {
            PlacementLevel::Unknown => "UNKNOWN",
            PlacementLevel::PreA0 => "PRE_A0",
            PlacementLevel::A0 => "A0",
            PlacementLevel::A1 => "A1",
            PlacementLevel::A2 => "A2",
            PlacementLevel::B1 => "B1",
            PlacementLevel::B2 => "B2",
            PlacementLevel::C1 => "C1",
            PlacementLevel::C2 => "C2",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PRE_A0" | "PREA0" => PlacementLevel::PreA0,
            "A0" => PlacementLevel::A0,
            "A1" => PlacementLevel::A1,
            "A2" => PlacementLevel::A2,
            "B1" => PlacementLevel::B1,
            "B2" => PlacementLevel::B2,
            "C1" => PlacementLevel::C1,
            "C2" => PlacementLevel::C2,
            _ => PlacementLevel::Unknown,
        }
    }

    /// The tier immediately below this one in the gating order. `None` for
    /// the floor tier and for `Unknown`, which is not a tier.
    pub fn preceding(self) -> Option<PlacementLevel> {
        match self {
            PlacementLevel::Unknown => None,
            PlacementLevel::PreA0 => None,
            PlacementLevel::A0 => Some(PlacementLevel::PreA0),
            PlacementLevel::A1 => Some(PlacementLevel::A0),
            PlacementLevel::A2 => Some(PlacementLevel::A1),
            PlacementLevel::B1 => Some(PlacementLevel::A2),
            PlacementLevel::B2 => Some(PlacementLevel::B1),
            PlacementLevel::C1 => Some(PlacementLevel::B2),
            PlacementLevel::C2 => Some(PlacementLevel::C1),
        }
    }
}
