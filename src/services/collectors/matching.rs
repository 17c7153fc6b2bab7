use std::collections::BTreeMap;

use crate::models::answer::{AnswerResult, LearnerAnswer};
use crate::models::question::MatchPair;
use crate::services::collectors::{ignore_frozen, AnswerCollector};
use crate::utils::text::non_blank_trimmed;

/// Click-to-pair widget: pick a left item, then the right item it belongs to.
///
/// A right item is held by at most one left item at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingCollector {
    left: Vec<String>,
    right: Vec<String>,
    selected: Option<String>,
    matches: BTreeMap<String, String>,
    result: Option<AnswerResult>,
}

impl MatchingCollector {
    pub fn new(pairs: &[MatchPair], saved: Option<LearnerAnswer>) -> Self {
        let (left, right): (Vec<String>, Vec<String>) = pairs
            .iter()
            .map(|p| (p.left.clone(), p.right.clone()))
            .unzip();
        let mut collector = Self {
            left: non_blank_trimmed(&left),
            right: non_blank_trimmed(&right),
            selected: None,
            matches: BTreeMap::new(),
            result: None,
        };
        if let Some(LearnerAnswer::Matches { matches }) = saved {
            for (l, r) in matches {
                collector.selected = Some(l);
                collector.assign_right(&r);
            }
            collector.selected = None;
        }
        collector
    }

    pub fn left_items(&self) -> &[String] {
        &self.left
    }

    pub fn right_items(&self) -> &[String] {
        &self.right
    }

    pub fn selected_left(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn matches(&self) -> &BTreeMap<String, String> {
        &self.matches
    }

    pub fn select_left(&mut self, item: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        if self.left.iter().any(|l| l == item) {
            self.selected = Some(item.to_string());
        }
    }

    /// Gives `item` to the selected left item, taking it from any other holder.
    pub fn assign_right(&mut self, item: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        let Some(left) = self.selected.take() else {
            tracing::debug!(item, "No left item selected");
            return;
        };
        if !self.left.contains(&left) || !self.right.iter().any(|r| r == item) {
            return;
        }
        self.matches.retain(|_, right| right.as_str() != item);
        self.matches.insert(left, item.to_string());
    }

    pub fn is_complete(&self) -> bool {
        !self.left.is_empty() && self.left.iter().all(|l| self.matches.contains_key(l))
    }
}

impl AnswerCollector for MatchingCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        if !self.is_complete() {
            return None;
        }
        Some(LearnerAnswer::Matches {
            matches: self.matches.clone(),
        })
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}
