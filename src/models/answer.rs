use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::question_kind::QuestionKind;

/// A learner's response, shaped like the correct answer of its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LearnerAnswer {
    /// MCQ and fill-in-the-blank.
    Single { answer: String },
    Selection { answers: Vec<String> },
    Verdict { answer: bool },
    Matches { matches: BTreeMap<String, String> },
    Arrangement { arranged_words: Vec<String> },
    Transcript { transcript: String },
}

impl LearnerAnswer {
    /// Reads a previously saved in-progress answer for `kind`.
    ///
    /// Anything that does not fit the kind's shape is treated as "no saved answer".
    pub fn from_saved(kind: QuestionKind, saved: &JsonValue) -> Option<Self> {
        match kind {
            QuestionKind::Mcq | QuestionKind::FillInTheBlank => saved
                .get("answer")
                .and_then(|v| v.as_str())
                .map(|answer| LearnerAnswer::Single {
                    answer: answer.to_string(),
                }),
            QuestionKind::MultipleSelect => saved
                .get("answers")
                .and_then(|v| serde_json::from_value::<Vec<String>>(v.clone()).ok())
                .map(|answers| LearnerAnswer::Selection { answers }),
            QuestionKind::TrueFalse => saved
                .get("answer")
                .and_then(|v| v.as_bool())
                .map(|answer| LearnerAnswer::Verdict { answer }),
            QuestionKind::Matching => saved
                .get("matches")
                .and_then(|v| serde_json::from_value::<BTreeMap<String, String>>(v.clone()).ok())
                .map(|matches| LearnerAnswer::Matches { matches }),
            QuestionKind::Ordering => saved
                .get("arranged_words")
                .and_then(|v| serde_json::from_value::<Vec<String>>(v.clone()).ok())
                .map(|arranged_words| LearnerAnswer::Arrangement { arranged_words }),
            QuestionKind::Transcript => saved
                .get("transcript")
                .and_then(|v| v.as_str())
                .map(|transcript| LearnerAnswer::Transcript {
                    transcript: transcript.to_string(),
                }),
            QuestionKind::Pronunciation => None,
        }
    }
}

/// Verdict returned by the external answer-checking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub is_correct: bool,
    #[serde(default)]
    pub correct_answer: Option<JsonValue>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub xp_earned: i32,
}

/// A submitted answer together with the verdict it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: i64,
    pub answer: LearnerAnswer,
    pub result: AnswerResult,
    pub answered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answers_serialize_to_kind_shapes() {
        let arrangement = LearnerAnswer::Arrangement {
            arranged_words: vec!["I".into(), "am".into()],
        };
        assert_eq!(
            serde_json::to_value(&arrangement).unwrap(),
            json!({"arranged_words": ["I", "am"]})
        );
        let verdict = LearnerAnswer::Verdict { answer: false };
        assert_eq!(serde_json::to_value(&verdict).unwrap(), json!({"answer": false}));
    }

    #[test]
    fn saved_answer_must_match_kind_shape() {
        let saved = json!({"answer": "Paris"});
        assert_eq!(
            LearnerAnswer::from_saved(QuestionKind::Mcq, &saved),
            Some(LearnerAnswer::Single {
                answer: "Paris".into()
            })
        );
        assert_eq!(LearnerAnswer::from_saved(QuestionKind::TrueFalse, &saved), None);
        assert_eq!(LearnerAnswer::from_saved(QuestionKind::Matching, &json!(null)), None);
    }

    #[test]
    fn result_tolerates_missing_optional_fields() {
        let result: AnswerResult = serde_json::from_value(json!({"is_correct": true})).unwrap();
        assert!(result.is_correct);
        assert_eq!(result.correct_answer, None);
        assert_eq!(result.xp_earned, 0);
    }
}
