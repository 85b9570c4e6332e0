use contact_book::table::{Orientation, TableModel};
use ratatui::layout::Constraint;

/// First row to draw so that `selected_index` stays visible.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// Column widths sized to the longest header or cell, capped at `max_width`.
pub fn column_widths(model: &impl TableModel, max_width: u16) -> Vec<Constraint> {
    (0..model.column_count())
        .map(|col| {
            let header = model
                .header(col, Orientation::Horizontal)
                .map_or(0, |h| h.chars().count());
            let widest = (0..model.row_count())
                .filter_map(|row| model.cell(row, col))
                .map(|cell| cell.chars().count())
                .fold(header, usize::max);
            let width = u16::try_from(widest).unwrap_or(u16::MAX).min(max_width);
            Constraint::Length(width)
        })
        .collect()
}
