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

/// The kind of exercise a grammar drill presents.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillKind {
    /// Type the missing word or phrase.
    FillIn,
    /// Pick one of the offered choices.
    MultipleChoice,
    /// Arrange the given words into a sentence. Order-sensitive.
    Reorder,
    /// Match the prompt to its counterpart.
    Matching,
}

/// Drill content as handed over by the content catalog. The engine never
/// inspects anything beyond what evaluation needs; everything else rides
/// along untouched for the caller's renderer.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrillContent {
    Grammar(GrammarDrill),
    Vocabulary(VocabCard),
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarDrill {
    pub kind: DrillKind,
    pub prompt: String,
    /// The expected solution. A single element for `FillIn`,
    /// `MultipleChoice`, and `Matching`; the full word sequence for
    /// `Reorder`.
    pub expected: Vec<String>,
    /// Offered choices, when the kind has any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabCard {
    pub term: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A learner's submission for one item.
#[derive(Clone, PartialEq, Debug)]
pub enum Answer {
    Text(String),
    /// A word sequence, as produced by a reorder widget.
    Sequence(Vec<String>),
}

impl DrillContent {
    pub fn grammar(kind: DrillKind, prompt: impl Into<String>, expected: Vec<String>) -> Self {
        DrillContent::Grammar(GrammarDrill {
            kind,
            prompt: prompt.into(),
            expected,
            choices: Vec::new(),
        })
    }

    pub fn vocabulary(term: impl Into<String>, translation: impl Into<String>) -> Self {
        DrillContent::Vocabulary(VocabCard {
            term: term.into(),
            translation: translation.into(),
            example: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminant_field() {
        let content = DrillContent::grammar(
            DrillKind::FillIn,
            "Ich ___ ein Buch.",
            vec!["lese".to_string()],
        );
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["type"], "grammar");
        assert_eq!(json["kind"], "fill_in");
    }

    #[test]
    fn test_vocabulary_round_trip() {
        let content = DrillContent::vocabulary("der Hund", "the dog");
        let json = serde_json::to_string(&content).unwrap();
        let back: DrillContent = serde_json::from_str(&json).unwrap();
        assert_eq!(content, back);
    }
}
