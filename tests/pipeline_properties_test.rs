use std::collections::{BTreeMap, HashSet};

use lesson_questions::models::form::AuthoringForm;
use lesson_questions::models::question::{MatchPair, Question};
use lesson_questions::models::question_kind::{KindTag, QuestionKind};
use lesson_questions::services::collectors::matching::MatchingCollector;
use lesson_questions::services::decoder::decode;
use lesson_questions::services::dispatcher::LearnerCollector;
use lesson_questions::services::editors::{apply, correct_answer, options, ordering, EditorAction};
use lesson_questions::services::encoder::encode;
use lesson_questions::services::formatter::{format_question_answer, Locale};
use lesson_questions::services::resetter::reset_for_kind;
use lesson_questions::utils::text::{is_blank, non_blank, non_blank_trimmed, split_answers};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn stored(form: &AuthoringForm) -> Question {
    let encoded = encode(form);
    Question {
        id: 1,
        kind: KindTag::from(form.kind),
        content: encoded.content,
        correct_answer: encoded.correct_answer,
        explanation: form.explanation.clone(),
        audio_url: form.audio_url.clone(),
        order_index: 0,
    }
}

fn sample_forms() -> Vec<AuthoringForm> {
    let mut mcq = AuthoringForm::blank(QuestionKind::Mcq);
    mcq.question_text = "Capital of France?".into();
    mcq.options = strings(&["Paris", "Lyon", "Nice", ""]);
    mcq.correct_answer = "Paris".into();

    let mut multi = AuthoringForm::blank(QuestionKind::MultipleSelect);
    multi.question_text = "Pick the colours".into();
    multi.options = strings(&["red", "blue", "green", ""]);
    multi.correct_answers = strings(&["blue", "green"]);

    let mut tf = AuthoringForm::blank(QuestionKind::TrueFalse);
    tf.question_text = "The sun is cold".into();
    tf.correct_answer = "false".into();

    let mut fib = AuthoringForm::blank(QuestionKind::FillInTheBlank);
    fib.question_text = "I ___ to school, yesterday I ___".into();
    fib.correct_answer = "go, went".into();

    let mut matching = AuthoringForm::blank(QuestionKind::Matching);
    matching.question_text = "Match".into();
    matching.left_items = strings(&["Cat", "Dog"]);
    matching.right_items = strings(&["Animal1", "Animal2"]);
    matching.match_pairs = [(0, 1), (1, 0)].into_iter().collect();

    let mut order = AuthoringForm::blank(QuestionKind::Ordering);
    order.question_text = "Arrange".into();
    order.options = strings(&["I", "am", "happy"]);
    order.arranged_words = strings(&["I", "am", "happy"]);

    let mut pronunciation = AuthoringForm::blank(QuestionKind::Pronunciation);
    pronunciation.question_text = "thorough".into();

    let mut transcript = AuthoringForm::blank(QuestionKind::Transcript);
    transcript.question_text = "Write what you hear".into();
    transcript.correct_answer = "good morning".into();
    transcript.audio_url = Some("https://cdn.example.com/morning.mp3".into());
    transcript.explanation = Some("A greeting".into());

    vec![mcq, multi, tf, fib, matching, order, pronunciation, transcript]
}

#[test]
fn decoding_then_encoding_reproduces_stored_payload() {
    for form in sample_forms() {
        let question = stored(&form);
        let decoded = decode(&question).unwrap();
        assert_eq!(decoded.kind, form.kind);
        assert_eq!(decoded.audio_url, form.audio_url);
        assert_eq!(decoded.explanation, form.explanation);
        assert_eq!(encode(&decoded), encode(&form), "kind {}", form.kind);
    }
}

/// Forms as an author leaves them: blank slots, untrimmed text, an
/// arrangement that differs from the option order.
fn untidy_forms() -> Vec<AuthoringForm> {
    let mut mcq = AuthoringForm::blank(QuestionKind::Mcq);
    mcq.question_text = "Capital of France?".into();
    mcq.options = strings(&["Paris", "", "Lyon", "Nice"]);
    mcq.correct_answer = "Lyon".into();

    let mut multi = AuthoringForm::blank(QuestionKind::MultipleSelect);
    multi.question_text = "Pick the colours".into();
    multi.options = strings(&["red", "", "blue", "green"]);
    multi.correct_answers = strings(&["green", "red"]);

    let mut tf = AuthoringForm::blank(QuestionKind::TrueFalse);
    tf.question_text = "The sky is blue".into();
    tf.correct_answer = "true".into();

    let mut fib = AuthoringForm::blank(QuestionKind::FillInTheBlank);
    fib.question_text = "I ___ to school".into();
    fib.correct_answer = " go ,went, ".into();

    let mut matching = AuthoringForm::blank(QuestionKind::Matching);
    matching.question_text = "Match".into();
    matching.left_items = strings(&["Cat", " ", "Dog "]);
    matching.right_items = strings(&["", "Woof", "Meow"]);
    matching.match_pairs = [(0, 2), (2, 1)].into_iter().collect();

    let ordering = [
        EditorAction::SetQuestionText {
            value: "Arrange".into(),
        },
        EditorAction::UpdateOption {
            index: 0,
            value: "I".into(),
        },
        EditorAction::UpdateOption {
            index: 1,
            value: "happy".into(),
        },
        EditorAction::UpdateOption {
            index: 2,
            value: "am".into(),
        },
        EditorAction::MoveWordUp { index: 2 },
    ]
    .into_iter()
    .fold(AuthoringForm::blank(QuestionKind::Ordering), apply);

    let mut pronunciation = AuthoringForm::blank(QuestionKind::Pronunciation);
    pronunciation.question_text = "thorough".into();
    pronunciation.correct_answer = "THUR-oh".into();

    let mut transcript = AuthoringForm::blank(QuestionKind::Transcript);
    transcript.question_text = "Write what you hear".into();
    transcript.correct_answer = "good morning".into();
    transcript.audio_url = Some("https://cdn.example.com/morning.mp3".into());
    transcript.explanation = Some("A greeting".into());

    vec![mcq, multi, tf, fib, matching, ordering, pronunciation, transcript]
}

/// Maps slot indices to their position among the filled slots.
fn filled_positions(slots: &[String]) -> BTreeMap<usize, usize> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| !is_blank(slot))
        .enumerate()
        .map(|(position, (slot, _))| (slot, position))
        .collect()
}

/// What a form should look like after a save and reload.
fn normalized(form: &AuthoringForm) -> AuthoringForm {
    let mut expected = AuthoringForm::blank(form.kind);
    expected.question_text = form.question_text.clone();
    expected.audio_url = form.audio_url.clone();
    expected.explanation = form.explanation.clone();
    match form.kind {
        QuestionKind::Mcq => {
            expected.options = non_blank(&form.options);
            expected.correct_answer = form.correct_answer.clone();
        }
        QuestionKind::MultipleSelect => {
            expected.options = non_blank(&form.options);
            expected.correct_answers = form
                .correct_answers
                .iter()
                .filter(|a| expected.options.contains(a))
                .cloned()
                .collect();
        }
        QuestionKind::TrueFalse | QuestionKind::Transcript => {
            expected.correct_answer = form.correct_answer.clone();
        }
        QuestionKind::FillInTheBlank => {
            expected.correct_answer = split_answers(&form.correct_answer).join(", ");
        }
        QuestionKind::Matching => {
            let left = filled_positions(&form.left_items);
            let right = filled_positions(&form.right_items);
            expected.left_items = non_blank_trimmed(&form.left_items);
            expected.right_items = non_blank_trimmed(&form.right_items);
            expected.match_pairs = form
                .match_pairs
                .iter()
                .filter_map(|(l, r)| Some((*left.get(l)?, *right.get(r)?)))
                .collect();
        }
        QuestionKind::Ordering => {
            expected.options = form.arranged_words.clone();
            expected.arranged_words = form.arranged_words.clone();
        }
        QuestionKind::Pronunciation => {
            expected.correct_answer = form.correct_answer.clone();
        }
    }
    expected
}

#[test]
fn saved_forms_reload_as_authored() {
    for form in untidy_forms().iter().chain(sample_forms().iter()) {
        let reloaded = decode(&stored(form)).unwrap();
        assert_eq!(reloaded, normalized(form), "kind {}", form.kind);
    }
}

#[test]
fn reordered_words_survive_a_save() {
    let form = &untidy_forms()[5];
    assert_eq!(form.options, strings(&["I", "happy", "am", ""]));
    assert_eq!(form.arranged_words, strings(&["I", "am", "happy"]));

    let question = stored(form);
    assert_eq!(question.content["items"], json!(["I", "am", "happy"]));
    assert_eq!(question.correct_answer, json!({"order": [0, 1, 2]}));
    assert_eq!(format_question_answer(&question, Locale::En), "I am happy");
    assert_eq!(
        decode(&question).unwrap().arranged_words,
        strings(&["I", "am", "happy"])
    );
}

#[test]
fn every_encoded_kind_gets_a_learner_widget() {
    let mut rng = StdRng::seed_from_u64(3);
    for form in sample_forms() {
        let collector = LearnerCollector::for_question(&stored(&form), None, &mut rng);
        assert!(collector.is_supported(), "kind {}", form.kind);
        assert!(!collector.can_submit());
    }
}

#[test]
fn authored_forms_decode_to_expected_fields() {
    let forms = sample_forms();

    let mcq = decode(&stored(&forms[0])).unwrap();
    assert_eq!(mcq.options, strings(&["Paris", "Lyon", "Nice"]));
    assert_eq!(mcq.correct_answer, "Paris");

    assert_eq!(stored(&forms[3]).correct_answer, json!({"answers": ["go", "went"]}));

    let matching = stored(&forms[4]);
    assert_eq!(
        matching.correct_answer,
        json!({"pairs": [
            {"left": "Cat", "right": "Animal2"},
            {"left": "Dog", "right": "Animal1"}
        ]})
    );
    assert_eq!(
        decode(&matching).unwrap().match_pairs,
        [(0, 1), (1, 0)].into_iter().collect()
    );

    let ordering = stored(&forms[5]);
    assert_eq!(ordering.content["items"], json!(["I", "am", "happy"]));
    assert_eq!(ordering.correct_answer, json!({"order": [0, 1, 2]}));
}

#[test]
fn switching_kind_keeps_only_shared_metadata() {
    for form in sample_forms() {
        for kind in QuestionKind::ALL {
            let reset = reset_for_kind(&form, kind);
            let mut expected = AuthoringForm::blank(kind);
            expected.audio_url = form.audio_url.clone();
            expected.explanation = form.explanation.clone();
            assert_eq!(reset, expected);
        }
    }
}

fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

fn filled(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect()
}

#[test]
fn arranged_words_track_option_edits() {
    let vocab = ["I", "am", "happy", "am", "", "  "];
    let mut rng = StdRng::seed_from_u64(42);
    let mut form = AuthoringForm::blank(QuestionKind::Ordering);

    for _ in 0..500 {
        form = match rng.gen_range(0..5) {
            0 => options::add_option(form),
            1 => {
                let index = rng.gen_range(0..form.options.len());
                let word = vocab.choose(&mut rng).copied().unwrap_or_default();
                options::update_option(form, index, word)
            }
            2 => {
                let index = rng.gen_range(0..form.options.len());
                options::remove_option(form, index)
            }
            3 => {
                let index = rng.gen_range(0..=form.arranged_words.len());
                ordering::move_up(form, index)
            }
            _ => {
                let index = rng.gen_range(0..=form.arranged_words.len());
                ordering::move_down(form, index)
            }
        };
        assert!(form.options.len() >= options::MIN_OPTIONS);
        assert_eq!(
            sorted(form.arranged_words.clone()),
            sorted(filled(&form.options))
        );
    }
}

#[test]
fn multiple_select_answers_stay_within_options() {
    let vocab = ["red", "blue", "green", "", "blue"];
    let mut rng = StdRng::seed_from_u64(9);
    let mut form = AuthoringForm::blank(QuestionKind::MultipleSelect);

    for _ in 0..500 {
        let word = vocab.choose(&mut rng).copied().unwrap_or_default();
        form = match rng.gen_range(0..4) {
            0 => options::add_option(form),
            1 => {
                let index = rng.gen_range(0..form.options.len());
                options::update_option(form, index, word)
            }
            2 => {
                let index = rng.gen_range(0..form.options.len());
                options::remove_option(form, index)
            }
            _ => correct_answer::toggle_option(form, word),
        };
        let current = filled(&form.options);
        assert!(form.correct_answers.iter().all(|a| current.contains(a)));
        let unique: HashSet<&String> = form.correct_answers.iter().collect();
        assert_eq!(unique.len(), form.correct_answers.len());
    }
}

#[test]
fn matching_clicks_never_share_a_right_item() {
    let pairs = vec![
        MatchPair {
            left: "Cat".into(),
            right: "Meow".into(),
        },
        MatchPair {
            left: "Dog".into(),
            right: "Woof".into(),
        },
        MatchPair {
            left: "Cow".into(),
            right: "Moo".into(),
        },
    ];
    let lefts = ["Cat", "Dog", "Cow", "Fox"];
    let rights = ["Meow", "Woof", "Moo", "Quack"];
    let mut rng = StdRng::seed_from_u64(5);
    let mut collector = MatchingCollector::new(&pairs, None);

    for _ in 0..500 {
        if rng.gen_bool(0.5) {
            collector.select_left(lefts.choose(&mut rng).copied().unwrap_or_default());
        } else {
            collector.assign_right(rights.choose(&mut rng).copied().unwrap_or_default());
        }
        let matches = collector.matches();
        let held: HashSet<&String> = matches.values().collect();
        assert_eq!(held.len(), matches.len());
        assert!(matches.keys().all(|l| collector.left_items().contains(l)));
        assert!(matches.values().all(|r| collector.right_items().contains(r)));
    }
}

#[test]
fn formatting_is_stable_across_calls() {
    for form in sample_forms() {
        let question = stored(&form);
        for locale in [Locale::En, Locale::Vi] {
            assert_eq!(
                format_question_answer(&question, locale),
                format_question_answer(&question, locale)
            );
        }
    }

    let forms = sample_forms();
    assert_eq!(format_question_answer(&stored(&forms[0]), Locale::En), "Paris");
    assert_eq!(format_question_answer(&stored(&forms[1]), Locale::En), "blue, green");
    assert_eq!(format_question_answer(&stored(&forms[2]), Locale::Vi), "Sai");
    assert_eq!(
        format_question_answer(&stored(&forms[4]), Locale::En),
        "Cat → Animal2, Dog → Animal1"
    );
    assert_eq!(format_question_answer(&stored(&forms[5]), Locale::En), "I am happy");
    assert_eq!(format_question_answer(&stored(&forms[6]), Locale::En), "thorough");
}
