use crate::models::answer::{AnswerResult, LearnerAnswer};
use crate::services::collectors::{ignore_frozen, AnswerCollector};
use crate::utils::text::non_blank;

#[derive(Debug, Clone, PartialEq)]
pub struct McqCollector {
    options: Vec<String>,
    selected: Option<String>,
    result: Option<AnswerResult>,
}

impl McqCollector {
    pub fn new(options: &[String], saved: Option<LearnerAnswer>) -> Self {
        let options = non_blank(options);
        let selected = match saved {
            Some(LearnerAnswer::Single { answer }) if options.contains(&answer) => Some(answer),
            _ => None,
        };
        Self {
            options,
            selected,
            result: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, option: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        if self.options.iter().any(|o| o == option) {
            self.selected = Some(option.to_string());
        }
    }
}

impl AnswerCollector for McqCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        self.selected
            .clone()
            .map(|answer| LearnerAnswer::Single { answer })
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectCollector {
    options: Vec<String>,
    selected: Vec<String>,
    result: Option<AnswerResult>,
}

impl MultiSelectCollector {
    pub fn new(options: &[String], saved: Option<LearnerAnswer>) -> Self {
        let options = non_blank(options);
        let selected = match saved {
            Some(LearnerAnswer::Selection { answers }) => answers
                .into_iter()
                .filter(|a| options.contains(a))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            options,
            selected,
            result: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn toggle(&mut self, option: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(pos);
        } else if self.options.iter().any(|o| o == option) {
            self.selected.push(option.to_string());
        }
    }
}

impl AnswerCollector for MultiSelectCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        if self.selected.is_empty() {
            return None;
        }
        Some(LearnerAnswer::Selection {
            answers: self.selected.clone(),
        })
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrueFalseCollector {
    choice: Option<bool>,
    result: Option<AnswerResult>,
}

impl TrueFalseCollector {
    pub fn new(saved: Option<LearnerAnswer>) -> Self {
        let choice = match saved {
            Some(LearnerAnswer::Verdict { answer }) => Some(answer),
            _ => None,
        };
        Self {
            choice,
            result: None,
        }
    }

    pub fn choice(&self) -> Option<bool> {
        self.choice
    }

    pub fn choose(&mut self, value: bool) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        self.choice = Some(value);
    }
}

impl AnswerCollector for TrueFalseCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        self.choice.map(|answer| LearnerAnswer::Verdict { answer })
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}
