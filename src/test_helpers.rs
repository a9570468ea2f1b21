//! Helpers shared by rendering tests

use ratatui::buffer::Buffer;

/// Rows of `buffer` as plain strings, one cell per symbol
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}
