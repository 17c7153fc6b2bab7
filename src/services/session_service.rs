use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::models::answer::{AnswerRecord, AnswerResult};
use crate::models::question::Question;
use crate::services::collectors::LearnerInput;
use crate::services::dispatcher::LearnerCollector;
use crate::services::submission_service::{
    AnswerSubmitter, Notifier, SubmissionService, SubmitOutcome,
};

/// Final tally of a finished section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub score: u32,
    pub correct: usize,
    pub total: usize,
}

impl SectionSummary {
    pub fn new(correct: usize, total: usize) -> Self {
        let score = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            score,
            correct,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    Moved(usize),
    /// The current question still needs a verdict.
    Blocked,
    Completed(SectionSummary),
}

/// Walks the questions of one lesson section in order.
#[derive(Debug, Clone)]
pub struct LessonSession {
    questions: Vec<Question>,
    collectors: Vec<LearnerCollector>,
    results: HashMap<i64, AnswerResult>,
    history: Vec<AnswerRecord>,
    cursor: usize,
}

impl LessonSession {
    /// `saved` holds in-progress answers keyed by question id.
    pub fn new<R: Rng + ?Sized>(
        mut questions: Vec<Question>,
        saved: &HashMap<i64, JsonValue>,
        rng: &mut R,
    ) -> Self {
        questions.sort_by_key(|q| q.order_index);
        let collectors = questions
            .iter()
            .map(|q| LearnerCollector::for_question(q, saved.get(&q.id), rng))
            .collect();
        info!(questions = questions.len(), "Lesson session started");
        Self {
            questions,
            collectors,
            results: HashMap::new(),
            history: Vec::new(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    pub fn collector(&self) -> Option<&LearnerCollector> {
        self.collectors.get(self.cursor)
    }

    pub fn collector_mut(&mut self) -> Option<&mut LearnerCollector> {
        self.collectors.get_mut(self.cursor)
    }

    pub fn apply(&mut self, input: LearnerInput) -> bool {
        self.collector_mut().is_some_and(|c| c.apply(input))
    }

    pub fn result(&self, question_id: i64) -> Option<&AnswerResult> {
        self.results.get(&question_id)
    }

    /// Submitted answers in the order they were checked.
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// Submits the current draft; a verdict freezes the question.
    pub async fn submit_current<S, N>(&mut self, service: &SubmissionService<S, N>) -> SubmitOutcome
    where
        S: AnswerSubmitter,
        N: Notifier,
    {
        let (Some(question), Some(collector)) = (self.current(), self.collector()) else {
            return SubmitOutcome::Ignored;
        };
        let question_id = question.id;
        let answer = match collector.answer() {
            Some(answer) if collector.can_submit() => answer,
            _ => {
                debug!(question_id, "Draft not ready for submission");
                return SubmitOutcome::Ignored;
            }
        };

        let outcome = service.submit(question_id, &answer).await;
        if let SubmitOutcome::Completed(result) = &outcome {
            self.history.push(AnswerRecord {
                question_id,
                answer,
                result: result.clone(),
                answered_at: Utc::now(),
            });
            self.complete_current(result.clone());
        }
        outcome
    }

    /// Records a verdict produced outside this session, such as an external
    /// pronunciation score.
    pub fn record_external_result(&mut self, result: AnswerResult) {
        if self.collector().is_some_and(|c| c.is_frozen()) {
            debug!("Question already answered, ignoring external result");
            return;
        }
        self.complete_current(result);
    }

    fn complete_current(&mut self, result: AnswerResult) {
        let Some(question_id) = self.current().map(|q| q.id) else {
            return;
        };
        if let Some(collector) = self.collectors.get_mut(self.cursor) {
            collector.freeze(result.clone());
        }
        self.results.insert(question_id, result);
    }

    /// Advances once the current question has a verdict; unsupported
    /// questions can always be skipped.
    pub fn next(&mut self) -> SessionStep {
        let Some(collector) = self.collector() else {
            return SessionStep::Completed(self.summary());
        };
        if collector.is_supported() && !collector.is_frozen() {
            return SessionStep::Blocked;
        }
        if self.cursor + 1 >= self.questions.len() {
            let summary = self.summary();
            info!(score = summary.score, correct = summary.correct, total = summary.total, "Lesson section completed");
            return SessionStep::Completed(summary);
        }
        self.cursor += 1;
        SessionStep::Moved(self.cursor)
    }

    pub fn prev(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Share of questions with a verdict, 0 to 100.
    pub fn progress_percent(&self) -> u32 {
        SectionSummary::new(self.results.len(), self.questions.len()).score
    }

    pub fn summary(&self) -> SectionSummary {
        let correct = self.results.values().filter(|r| r.is_correct).count();
        SectionSummary::new(correct, self.questions.len())
    }
}
