use serde::Serialize;

use crate::models::question_kind::{KindTag, QuestionKind};

/// Colour family a kind badge is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
    Blue,
    Green,
    Teal,
    Purple,
    Orange,
    Indigo,
    Violet,
    Pink,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    pub kind: QuestionKind,
    pub label: &'static str,
    pub category: StyleCategory,
}

static KIND_REGISTRY: [KindInfo; 8] = [
    KindInfo {
        kind: QuestionKind::Mcq,
        label: "MCQ",
        category: StyleCategory::Blue,
    },
    KindInfo {
        kind: QuestionKind::MultipleSelect,
        label: "Multiple Select",
        category: StyleCategory::Green,
    },
    KindInfo {
        kind: QuestionKind::TrueFalse,
        label: "True/False",
        category: StyleCategory::Teal,
    },
    KindInfo {
        kind: QuestionKind::FillInTheBlank,
        label: "Fill in the blank",
        category: StyleCategory::Purple,
    },
    KindInfo {
        kind: QuestionKind::Matching,
        label: "Matching",
        category: StyleCategory::Orange,
    },
    KindInfo {
        kind: QuestionKind::Ordering,
        label: "Ordering",
        category: StyleCategory::Indigo,
    },
    KindInfo {
        kind: QuestionKind::Pronunciation,
        label: "Pronunciation",
        category: StyleCategory::Violet,
    },
    KindInfo {
        kind: QuestionKind::Transcript,
        label: "Transcript",
        category: StyleCategory::Pink,
    },
];

pub fn all_kinds() -> &'static [KindInfo] {
    &KIND_REGISTRY
}

pub fn kind_info(kind: QuestionKind) -> &'static KindInfo {
    let idx = match kind {
        QuestionKind::Mcq => 0,
        QuestionKind::MultipleSelect => 1,
        QuestionKind::TrueFalse => 2,
        QuestionKind::FillInTheBlank => 3,
        QuestionKind::Matching => 4,
        QuestionKind::Ordering => 5,
        QuestionKind::Pronunciation => 6,
        QuestionKind::Transcript => 7,
    };
    &KIND_REGISTRY[idx]
}

/// Display label for any tag; unsupported tags are shown verbatim.
pub fn label_for<'a>(tag: &'a KindTag) -> &'a str {
    match tag {
        KindTag::Known(kind) => kind_info(*kind).label,
        KindTag::Unsupported(raw) => raw.as_str(),
    }
}

pub fn category_for(tag: &KindTag) -> StyleCategory {
    match tag {
        KindTag::Known(kind) => kind_info(*kind).category,
        KindTag::Unsupported(_) => StyleCategory::Neutral,
    }
}
