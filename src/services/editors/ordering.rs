use crate::models::form::AuthoringForm;
use crate::utils::text::non_blank;

/// Brings `arranged` back in line with the non-blank `options`.
///
/// Entries are matched by value, one occurrence at a time: arranged words
/// keep their position while an equal option is still available, and options
/// left unclaimed are appended in input order. Returns `None` when nothing
/// changes, which makes repeated calls a no-op.
pub fn sync_arranged(options: &[String], arranged: &[String]) -> Option<Vec<String>> {
    let mut unclaimed = non_blank(options);
    let mut synced = Vec::with_capacity(unclaimed.len());
    for word in arranged {
        if let Some(pos) = unclaimed.iter().position(|option| option == word) {
            synced.push(unclaimed.remove(pos));
        }
    }
    synced.append(&mut unclaimed);

    if synced.as_slice() == arranged {
        None
    } else {
        Some(synced)
    }
}

pub fn move_up(form: AuthoringForm, index: usize) -> AuthoringForm {
    if index == 0 {
        tracing::debug!(index, "Arranged word already first");
        return form;
    }
    swap_arranged(form, index - 1, index)
}

pub fn move_down(form: AuthoringForm, index: usize) -> AuthoringForm {
    swap_arranged(form, index, index + 1)
}

fn swap_arranged(mut form: AuthoringForm, a: usize, b: usize) -> AuthoringForm {
    if b >= form.arranged_words.len() {
        tracing::debug!(a, b, "Arranged swap out of bounds");
        return form;
    }
    form.arranged_words.swap(a, b);
    form
}
