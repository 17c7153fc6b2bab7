use crate::models::form::AuthoringForm;
use crate::utils::text::is_blank;

pub fn set_audio(mut form: AuthoringForm, audio_url: Option<String>) -> AuthoringForm {
    form.audio_url = audio_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());
    form
}

pub fn set_instruction(mut form: AuthoringForm, instruction: &str) -> AuthoringForm {
    form.question_text = instruction.to_string();
    form
}

pub fn set_transcript(mut form: AuthoringForm, transcript: &str) -> AuthoringForm {
    form.correct_answer = transcript.to_string();
    form
}

/// A transcript question can only be saved with audio and an instruction.
pub fn is_ready(form: &AuthoringForm) -> bool {
    form.audio_url.as_deref().is_some_and(|url| !is_blank(url)) && !is_blank(&form.question_text)
}
