use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Writes `input` starting at `(x, y)`, never past `max_cols` cells.
///
/// A wide character that would straddle the limit is dropped rather than split. Control
/// characters are skipped. Returns the number of cells written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if dx + w > max_cols {
            break;
        }

        let s = ch.encode_utf8(&mut tmp);
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(s);
        }
        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + dx + 1, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
        }
        dx += w;
    }
    dx
}

/// Fills the first row of `row` with spaces in `style`.
pub fn clear_row(row: Rect, buf: &mut Buffer, style: Style) {
    for dx in 0..row.width {
        if let Some(cell) = buf.cell_mut((row.x + dx, row.y)) {
            cell.set_style(style);
            cell.set_symbol(" ");
        }
    }
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn clipped_string_stops_at_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        let n = render_str_clipped(0, 0, 4, &mut buf, "abcdef", Style::default());
        assert_eq!(n, 4);
        assert_eq!(row(&buf, 0), "abcd  ");
    }

    #[test]
    fn wide_char_is_not_split_at_the_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let n = render_str_clipped(0, 0, 3, &mut buf, "你好", Style::default());
        assert_eq!(n, 2);
        assert_eq!(display_width("你好"), 4);
    }
}
