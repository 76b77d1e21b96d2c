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

use crate::error::Fallible;

const DEFAULT_XP_PER_CORRECT: u32 = 10;
const DEFAULT_REVIEW_LIMIT: usize = 20;
const DEFAULT_MASTERY_THRESHOLD_PCT: u8 = 80;

/// Engine tuning knobs. Embedders either take the defaults or parse a TOML
/// snippet from wherever they keep app settings.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// XP awarded per correct answer.
    #[serde(default = "default_xp_per_correct")]
    pub xp_per_correct: u32,
    /// How many weak items a review session pulls at most.
    #[serde(default = "default_review_limit")]
    pub review_limit: usize,
    /// Score percentage at or above which a fully answered lesson counts
    /// as mastered.
    #[serde(default = "default_mastery_threshold_pct")]
    pub mastery_threshold_pct: u8,
}

fn default_xp_per_correct() -> u32 {
    DEFAULT_XP_PER_CORRECT
}

fn default_review_limit() -> usize {
    DEFAULT_REVIEW_LIMIT
}

fn default_mastery_threshold_pct() -> u8 {
    DEFAULT_MASTERY_THRESHOLD_PCT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            xp_per_correct: DEFAULT_XP_PER_CORRECT,
            review_limit: DEFAULT_REVIEW_LIMIT,
            mastery_threshold_pct: DEFAULT_MASTERY_THRESHOLD_PCT,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Fallible<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_defaults() -> Fallible<()> {
        let config = Config::from_toml_str("")?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_overrides() -> Fallible<()> {
        let config = Config::from_toml_str("xp-per-correct = 25\nreview-limit = 5\n")?;
        assert_eq!(config.xp_per_correct, 25);
        assert_eq!(config.review_limit, 5);
        assert_eq!(config.mastery_threshold_pct, 80);
        Ok(())
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::from_toml_str("bogus-knob = 1\n").is_err());
    }
}
