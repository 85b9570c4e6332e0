pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves a table selection by `delta` rows, staying inside `0..len`.
pub fn step_selection(selected: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let row = selected.unwrap_or(0);
    let moved = row.saturating_add_signed(delta);
    Some(moved.min(len - 1))
}
