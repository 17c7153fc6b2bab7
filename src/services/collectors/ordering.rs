use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::answer::{AnswerResult, LearnerAnswer};
use crate::services::collectors::{ignore_frozen, AnswerCollector};
use crate::utils::text::non_blank;

/// Word-arranging widget with an "available" and an "arranged" pool.
///
/// Words move between pools by value; with repeated words the first equal
/// occurrence is the one that moves.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingCollector {
    available: Vec<String>,
    arranged: Vec<String>,
    result: Option<AnswerResult>,
}

impl OrderingCollector {
    pub fn new<R: Rng + ?Sized>(items: &[String], saved: Option<LearnerAnswer>, rng: &mut R) -> Self {
        let mut available = non_blank(items);
        available.shuffle(rng);
        let mut collector = Self {
            available,
            arranged: Vec::new(),
            result: None,
        };
        if let Some(LearnerAnswer::Arrangement { arranged_words }) = saved {
            for word in &arranged_words {
                collector.pick(word);
            }
        }
        collector
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn arranged(&self) -> &[String] {
        &self.arranged
    }

    pub fn pick(&mut self, word: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        move_word(&mut self.available, &mut self.arranged, word);
    }

    pub fn put_back(&mut self, word: &str) {
        if ignore_frozen(self.is_frozen()) {
            return;
        }
        move_word(&mut self.arranged, &mut self.available, word);
    }
}

fn move_word(from: &mut Vec<String>, to: &mut Vec<String>, word: &str) {
    match from.iter().position(|w| w == word) {
        Some(pos) => to.push(from.remove(pos)),
        None => tracing::debug!(word, "Word not in source pool"),
    }
}

impl AnswerCollector for OrderingCollector {
    fn answer(&self) -> Option<LearnerAnswer> {
        if !self.available.is_empty() || self.arranged.is_empty() {
            return None;
        }
        Some(LearnerAnswer::Arrangement {
            arranged_words: self.arranged.clone(),
        })
    }

    fn result(&self) -> Option<&AnswerResult> {
        self.result.as_ref()
    }

    fn freeze(&mut self, result: AnswerResult) {
        self.result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn pool_is_a_shuffle_of_the_items() {
        let mut rng = StdRng::seed_from_u64(7);
        let c = OrderingCollector::new(&words(&["I", "am", "", "happy"]), None, &mut rng);
        let mut pool = c.available().to_vec();
        pool.sort();
        assert_eq!(pool, words(&["I", "am", "happy"]));
        assert!(c.arranged().is_empty());
    }

    #[test]
    fn submit_requires_every_word_placed() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = OrderingCollector::new(&words(&["I", "am", "happy"]), None, &mut rng);
        c.pick("I");
        c.pick("am");
        assert!(!c.can_submit());
        c.pick("happy");
        assert_eq!(
            c.answer(),
            Some(LearnerAnswer::Arrangement {
                arranged_words: words(&["I", "am", "happy"])
            })
        );
        c.put_back("am");
        assert_eq!(c.arranged(), words(&["I", "happy"]).as_slice());
        assert!(!c.can_submit());
    }

    #[test]
    fn repeated_words_move_one_at_a_time() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = OrderingCollector::new(&words(&["la", "la", "land"]), None, &mut rng);
        c.pick("la");
        assert_eq!(c.arranged(), words(&["la"]).as_slice());
        assert_eq!(c.available().iter().filter(|w| *w == "la").count(), 1);
    }

    #[test]
    fn saved_arrangement_is_restored() {
        let mut rng = StdRng::seed_from_u64(9);
        let saved = LearnerAnswer::Arrangement {
            arranged_words: words(&["am", "I"]),
        };
        let c = OrderingCollector::new(&words(&["I", "am", "happy"]), Some(saved), &mut rng);
        assert_eq!(c.arranged(), words(&["am", "I"]).as_slice());
        assert_eq!(c.available(), words(&["happy"]).as_slice());
    }
}
