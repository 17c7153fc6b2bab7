use crate::models::answer::{AnswerResult, LearnerAnswer};
use crate::services::collectors::{ignore_frozen, AnswerCollector};

/// Pronunciation is scored by an external recorder; this side only keeps the
/// latest score it reported.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PronunciationCollector {
    target: String,
    latest_score: Option<f64>,
    result: Option<AnswerResult>,
}

impl PronunciationCollector {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            latest_score: None,
            result: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn latest_score(&self) -> Option<f64> {
        self.latest_score
    }

    pub fn record_score(&mut self, score: f64) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        if !score.is_finite() {
            tracing::warn!(score, "Discarding non-finite pronunciation score");
            return;
        }
        self.latest_score = Some(score);
    }
}

impl AnswerCollector for PronunciationCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        None
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}
