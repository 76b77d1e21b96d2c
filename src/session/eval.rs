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

use crate::types::content::Answer;
use crate::types::content::DrillContent;
use crate::types::content::DrillKind;
use crate::types::content::GrammarDrill;

/// Canonical form for comparison: trimmed, lowercased, internal whitespace
/// runs collapsed to a single space.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether the submission matches the item's expected solution.
///
/// Reorder drills compare the full space-joined word sequence, so the same
/// words in a different order do not pass. Every other kind is a
/// single-value comparison; when either side is a sequence, only its first
/// element counts (shape mismatches degrade instead of failing).
pub fn evaluate(content: &DrillContent, answer: &Answer) -> bool {
    match content {
        DrillContent::Grammar(drill) => match drill.kind {
            DrillKind::Reorder => {
                let expected = normalize(&drill.expected.join(" "));
                let submitted = normalize(&joined(answer));
                !expected.is_empty() && expected == submitted
            }
            DrillKind::FillIn | DrillKind::MultipleChoice | DrillKind::Matching => {
                single_value_match(drill.expected.first(), answer)
            }
        },
        DrillContent::Vocabulary(card) => {
            single_value_match(Some(&card.translation), answer)
        }
    }
}

/// What the item wanted to hear, for feedback text.
pub fn expected_display(content: &DrillContent) -> String {
    match content {
        DrillContent::Grammar(GrammarDrill {
            kind: DrillKind::Reorder,
            expected,
            ..
        }) => expected.join(" "),
        DrillContent::Grammar(GrammarDrill { expected, .. }) => {
            expected.first().cloned().unwrap_or_default()
        }
        DrillContent::Vocabulary(card) => card.translation.clone(),
    }
}

fn single_value_match(expected: Option<&String>, answer: &Answer) -> bool {
    let expected = match expected {
        Some(expected) => normalize(expected),
        None => return false,
    };
    let submitted = match answer {
        Answer::Text(text) => normalize(text),
        Answer::Sequence(words) => match words.first() {
            Some(first) => normalize(first),
            None => return false,
        },
    };
    !expected.is_empty() && expected == submitted
}

fn joined(answer: &Answer) -> String {
    match answer {
        Answer::Text(text) => text.clone(),
        Answer::Sequence(words) => words.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_in(expected: &str) -> DrillContent {
        DrillContent::grammar(DrillKind::FillIn, "?", vec![expected.to_string()])
    }

    fn reorder(words: &[&str]) -> DrillContent {
        DrillContent::grammar(
            DrillKind::Reorder,
            "?",
            words.iter().map(|w| w.to_string()).collect(),
        )
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Ich   LESE\tein Buch "), "ich lese ein buch");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let drill = fill_in("der Hund");
        assert!(evaluate(&drill, &Answer::Text("  DER   hund ".to_string())));
        assert!(!evaluate(&drill, &Answer::Text("die Hunde".to_string())));
    }

    #[test]
    fn test_reorder_is_order_sensitive() {
        let drill = reorder(&["ich", "lese", "ein", "Buch"]);
        let right = Answer::Sequence(
            ["ich", "lese", "ein", "buch"].iter().map(|w| w.to_string()).collect(),
        );
        let scrambled = Answer::Sequence(
            ["ein", "Buch", "ich", "lese"].iter().map(|w| w.to_string()).collect(),
        );
        assert!(evaluate(&drill, &right));
        assert!(!evaluate(&drill, &scrambled));
    }

    #[test]
    fn test_reorder_accepts_joined_text() {
        let drill = reorder(&["ich", "lese", "ein", "Buch"]);
        assert!(evaluate(&drill, &Answer::Text("Ich lese  ein Buch".to_string())));
    }

    #[test]
    fn test_sequence_submission_to_single_value_drill() {
        // Shape mismatch: only the first element counts.
        let drill = fill_in("lese");
        let answer = Answer::Sequence(vec!["lese".to_string(), "Buch".to_string()]);
        assert!(evaluate(&drill, &answer));
    }

    #[test]
    fn test_multi_element_expected_compares_first() {
        let drill = DrillContent::grammar(
            DrillKind::MultipleChoice,
            "?",
            vec!["lese".to_string(), "liest".to_string()],
        );
        assert!(evaluate(&drill, &Answer::Text("lese".to_string())));
        assert!(!evaluate(&drill, &Answer::Text("liest".to_string())));
    }

    #[test]
    fn test_vocabulary_compares_translation() {
        let card = DrillContent::vocabulary("der Hund", "the dog");
        assert!(evaluate(&card, &Answer::Text("The  Dog".to_string())));
        assert!(!evaluate(&card, &Answer::Text("the cat".to_string())));
    }

    #[test]
    fn test_degenerate_content_never_passes() {
        let empty = DrillContent::grammar(DrillKind::FillIn, "?", Vec::new());
        assert!(!evaluate(&empty, &Answer::Text("".to_string())));
        let empty_seq = Answer::Sequence(Vec::new());
        assert!(!evaluate(&fill_in("x"), &empty_seq));
    }

    #[test]
    fn test_expected_display() {
        assert_eq!(expected_display(&fill_in("lese")), "lese");
        assert_eq!(
            expected_display(&reorder(&["ich", "lese"])),
            "ich lese"
        );
        assert_eq!(
            expected_display(&DrillContent::vocabulary("der Hund", "the dog")),
            "the dog"
        );
    }
}
