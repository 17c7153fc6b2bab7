use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::dto::question_dto::SubmitAnswerRequest;
use crate::error::{Error, Result};
use crate::models::answer::{AnswerResult, LearnerAnswer};

/// Sends a learner answer to the answer-checking service.
pub trait AnswerSubmitter: Send + Sync {
    fn submit(
        &self,
        question_id: i64,
        answer: &LearnerAnswer,
    ) -> impl Future<Output = Result<AnswerResult>> + Send;
}

/// Delivers one-shot messages about failed submissions to the learner.
pub trait Notifier: Send + Sync {
    fn notify_failure(&self, question_id: i64, message: &str);
}

#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_failure(&self, question_id: i64, message: &str) {
        warn!(question_id, "Answer not submitted: {}", message);
    }
}

#[derive(Clone, Debug)]
pub struct HttpAnswerSubmitter {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpAnswerSubmitter {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.submit_timeout_secs))
            .build()?;

        // `Url::join` replaces the last segment unless the base ends with '/'.
        let mut base = config.answer_api_base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;
        info!("Answer submission endpoint: {}", base_url);

        Ok(Self {
            client,
            base_url,
            token: config.answer_api_token.clone(),
        })
    }

    pub fn endpoint(&self, question_id: i64) -> Result<Url> {
        Ok(self
            .base_url
            .join(&format!("questions/{}/answer", question_id))?)
    }
}

impl AnswerSubmitter for HttpAnswerSubmitter {
    async fn submit(&self, question_id: i64, answer: &LearnerAnswer) -> Result<AnswerResult> {
        let url = self.endpoint(question_id)?;
        let body = SubmitAnswerRequest {
            answer: answer.clone(),
        };
        let mut request = self.client.post(url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_detail(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            warn!(question_id, status = status.as_u16(), "Answer service rejected submission: {}", message);
            return Err(Error::Submission {
                status: status.as_u16(),
                message,
            });
        }

        let result = response.json::<AnswerResult>().await?;
        debug!(question_id, is_correct = result.is_correct, "Answer checked");
        Ok(result)
    }
}

/// Pulls the human readable `detail` out of an error body, if there is one.
fn error_detail(body: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        JsonValue::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

/// Tracks questions with a submission in flight.
#[derive(Clone, Debug, Default)]
pub struct SubmissionGate {
    in_flight: Arc<Mutex<HashSet<i64>>>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `question_id`; `None` while another submission for it is pending.
    pub fn try_acquire(&self, question_id: i64) -> Option<SubmissionGuard> {
        let mut guard = self.in_flight.lock().expect("submission gate mutex poisoned");
        if !guard.insert(question_id) {
            return None;
        }
        Some(SubmissionGuard {
            gate: self.clone(),
            question_id,
        })
    }

    pub fn is_pending(&self, question_id: i64) -> bool {
        self.in_flight
            .lock()
            .expect("submission gate mutex poisoned")
            .contains(&question_id)
    }

    fn release(&self, question_id: i64) {
        self.in_flight
            .lock()
            .expect("submission gate mutex poisoned")
            .remove(&question_id);
    }
}

/// Releases the question when the submission finishes or is dropped.
#[derive(Debug)]
pub struct SubmissionGuard {
    gate: SubmissionGate,
    question_id: i64,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.gate.release(self.question_id);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission for the question was still pending.
    Ignored,
    Completed(AnswerResult),
    /// The learner was notified; the draft is left as it was.
    Failed(String),
}

#[derive(Clone)]
pub struct SubmissionService<S, N> {
    submitter: S,
    notifier: N,
    gate: SubmissionGate,
}

impl<S: AnswerSubmitter, N: Notifier> SubmissionService<S, N> {
    pub fn new(submitter: S, notifier: N) -> Self {
        Self {
            submitter,
            notifier,
            gate: SubmissionGate::new(),
        }
    }

    pub fn is_pending(&self, question_id: i64) -> bool {
        self.gate.is_pending(question_id)
    }

    pub async fn submit(&self, question_id: i64, answer: &LearnerAnswer) -> SubmitOutcome {
        let Some(_guard) = self.gate.try_acquire(question_id) else {
            debug!(question_id, "Submission already pending, ignoring");
            return SubmitOutcome::Ignored;
        };

        match self.submitter.submit(question_id, answer).await {
            Ok(result) => SubmitOutcome::Completed(result),
            Err(e) => {
                let message = e.to_string();
                self.notifier.notify_failure(question_id, &message);
                SubmitOutcome::Failed(message)
            }
        }
    }
}
