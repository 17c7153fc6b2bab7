use crate::models::answer::{AnswerResult, LearnerAnswer};
use crate::services::collectors::{ignore_frozen, AnswerCollector};

/// Free-text answer for a sentence with blanks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FillBlankCollector {
    text: String,
    result: Option<AnswerResult>,
}

impl FillBlankCollector {
    pub fn new(saved: Option<LearnerAnswer>) -> Self {
        let text = match saved {
            Some(LearnerAnswer::Single { answer }) => answer,
            _ => String::new(),
        };
        Self { text, result: None }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, value: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        self.text = value.to_string();
    }
}

impl AnswerCollector for FillBlankCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        trimmed(&self.text).map(|answer| LearnerAnswer::Single { answer })
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}

/// Dictation: the learner writes down what the audio says.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranscriptCollector {
    audio_url: Option<String>,
    transcript: String,
    result: Option<AnswerResult>,
}

impl TranscriptCollector {
    pub fn new(audio_url: Option<String>, saved: Option<LearnerAnswer>) -> Self {
        let transcript = match saved {
            Some(LearnerAnswer::Transcript { transcript }) => transcript,
            _ => String::new(),
        };
        Self {
            audio_url,
            transcript,
            result: None,
        }
    }

    pub fn audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref()
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn set_text(&mut self, value: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        self.transcript = value.to_string();
    }
}

impl AnswerCollector for TranscriptCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        trimmed(&self.transcript).map(|transcript| LearnerAnswer::Transcript { transcript })
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}

fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
