use std::collections::BTreeMap;

use crate::models::form::AuthoringForm;

/// Pair rows never drop below this count.
pub const MIN_PAIRS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub fn add_pair(mut form: AuthoringForm) -> AuthoringForm {
    form.left_items.push(String::new());
    form.right_items.push(String::new());
    form
}

/// Drops one row from both columns along with any link that touches it.
pub fn remove_pair(mut form: AuthoringForm, index: usize) -> AuthoringForm {
    let rows = form.left_items.len().max(form.right_items.len());
    if rows <= MIN_PAIRS || index >= rows {
        tracing::debug!(index, rows, "Pair removal blocked");
        return form;
    }
    if index < form.left_items.len() {
        form.left_items.remove(index);
    }
    if index < form.right_items.len() {
        form.right_items.remove(index);
    }
    form.match_pairs = shift_links(&form.match_pairs, index);
    form
}

pub fn update_item(mut form: AuthoringForm, side: Side, index: usize, value: &str) -> AuthoringForm {
    let column = match side {
        Side::Left => &mut form.left_items,
        Side::Right => &mut form.right_items,
    };
    match column.get_mut(index) {
        Some(slot) => *slot = value.to_string(),
        None => tracing::debug!(?side, index, "Ignoring update of missing item slot"),
    }
    form
}

/// Points `left` at `right`, replacing whatever it pointed at before.
///
/// Several left items may share one right item here; the learner side is
/// where right items become unique.
pub fn link(mut form: AuthoringForm, left: usize, right: usize) -> AuthoringForm {
    if left >= form.left_items.len() || right >= form.right_items.len() {
        tracing::debug!(left, right, "Ignoring link to missing slot");
        return form;
    }
    form.match_pairs.insert(left, right);
    form
}

pub fn unlink(mut form: AuthoringForm, left: usize) -> AuthoringForm {
    form.match_pairs.remove(&left);
    form
}

fn shift_links(links: &BTreeMap<usize, usize>, removed: usize) -> BTreeMap<usize, usize> {
    let shift = |idx: usize| if idx > removed { idx - 1 } else { idx };
    links
        .iter()
        .filter(|(l, r)| **l != removed && **r != removed)
        .map(|(l, r)| (shift(*l), shift(*r)))
        .collect()
}
