//! Learner-side answer collectors, one per question kind.
//!
//! A collector accumulates a draft from learner input and becomes read-only
//! once it is frozen with the verdict of a submission.

pub mod choice;
pub mod matching;
pub mod ordering;
pub mod pronunciation;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::models::answer::{AnswerResult, LearnerAnswer};

pub use self::choice::{McqCollector, MultiSelectCollector, TrueFalseCollector};
pub use self::matching::MatchingCollector;
pub use self::ordering::OrderingCollector;
pub use self::pronunciation::PronunciationCollector;
pub use self::text::{FillBlankCollector, TranscriptCollector};

pub trait AnswerCollector {
    /// The answer as it would be submitted, or `None` while the draft is incomplete.
    fn answer(&self) -> Option<LearnerAnswer>;

    fn result(&self) -> Option<&AnswerResult>;

    /// Locks the collector; later input is ignored.
    fn freeze(&mut self, result: AnswerResult);

    fn is_frozen(&self) -> bool {
        self.result().is_some()
    }

    fn can_submit(&self) -> bool {
        !self.is_frozen() && self.answer().is_some()
    }
}

/// One learner interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum LearnerInput {
    /// Selects an MCQ option or toggles a multiple-select option.
    Choose { option: String },
    Verdict { value: bool },
    Text { value: String },
    SelectLeft { item: String },
    AssignRight { item: String },
    PickWord { word: String },
    ReturnWord { word: String },
    Score { score: f64 },
}

pub(crate) fn ignore_frozen(frozen: bool) -> bool {
    if frozen {
        tracing::debug!("Ignoring input on answered question");
    }
    frozen
}
