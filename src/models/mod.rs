pub mod answer;
pub mod form;
pub mod question;
pub mod question_kind;
