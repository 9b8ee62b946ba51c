use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::Dropdown;
use crate::render;
use crate::theme::Theme;

/// Screen rectangles from the last render, used for hit testing.
#[derive(Clone, Debug, Default)]
pub(crate) struct HitAreas {
    container: Rect,
    list: Rect,
    items: Vec<(usize, Rect)>,
}

impl HitAreas {
    pub(crate) fn container_contains(&self, x: u16, y: u16) -> bool {
        self.container.contains(Position::new(x, y))
    }

    pub(crate) fn list_contains(&self, x: u16, y: u16) -> bool {
        self.list.contains(Position::new(x, y))
    }

    pub(crate) fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        self.items
            .iter()
            .find(|(_, r)| r.contains(Position::new(x, y)))
            .map(|(i, _)| *i)
    }
}

impl Dropdown {
    /// Rows needed: the label, the trigger and, while open, the visible part of the list.
    pub fn desired_height(&self) -> u16 {
        if self.is_open() {
            2 + self.list_rows()
        } else {
            2
        }
    }

    fn list_rows(&self) -> u16 {
        let len = self.list.len().min(u16::MAX as usize) as u16;
        len.min(self.options.max_visible_items)
    }

    /// Draws the label row, the trigger row and, while open, the list directly below.
    ///
    /// The list is clipped to `area`; give it [`Dropdown::desired_height`] rows to show all of
    /// `max_visible_items`. Apps rendering several dropdowns should draw the open one last so its
    /// list sits on top.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.hit = HitAreas::default();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let open = self.is_open();
        let focused = self.is_focused();
        let invalid = self.is_invalid();
        let hovered = self.hovered();
        let rows = self.list_rows();
        let names = &self.options.class_names;

        let base = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };

        let label_style = if self.label.classes().contains(&names.label_invalid) {
            theme.danger
        } else if self.label.classes().contains(&names.label_has_value) {
            theme.text_primary
        } else {
            theme.text_muted
        };
        let label_row = Rect::new(area.x, area.y, area.width, 1);
        render::clear_row(label_row, buf, base);
        render::render_str_clipped(
            area.x,
            area.y,
            area.width,
            buf,
            &self.label.text_content(),
            label_style,
        );
        if area.height < 2 {
            return;
        }

        let trigger = Rect::new(area.x, area.y + 1, area.width, 1);
        let mut trigger_style = base;
        if focused {
            trigger_style = trigger_style.patch(theme.accent);
        }
        if invalid {
            trigger_style = trigger_style.patch(theme.danger);
        }
        render::clear_row(trigger, buf, trigger_style);

        let (text, text_style) = match self.select.selected() {
            Some(option) => (option.label(), trigger_style),
            None => (
                self.options.placeholder.as_str(),
                trigger_style.patch(theme.text_muted),
            ),
        };
        let indicator = if open {
            &self.options.open_indicator
        } else {
            &self.options.closed_indicator
        };
        let indicator_w = render::display_width(indicator).min(u16::MAX as usize) as u16;
        let text_w = trigger.width.saturating_sub(indicator_w.saturating_add(2));
        render::render_str_clipped(trigger.x + 1, trigger.y, text_w, buf, text, text_style);
        if trigger.width > indicator_w {
            render::render_str_clipped(
                trigger.right() - indicator_w,
                trigger.y,
                indicator_w,
                buf,
                indicator,
                trigger_style,
            );
        }
        self.hit.container = trigger;

        let rows = rows.min(area.height - 2);
        if !open || rows == 0 {
            return;
        }

        let list_area = Rect::new(area.x, area.y + 2, area.width, rows);
        self.viewport.set_viewport(rows);
        self.viewport.set_content(self.list.len() as u32);
        if self.follow_hover {
            if let Some(idx) = hovered {
                self.viewport.ensure_visible(idx as u32);
            }
            self.follow_hover = false;
        }

        let (content, scrollbar_x) =
            if self.options.show_scrollbar && self.viewport.overflows() && list_area.width >= 2 {
                (
                    Rect::new(list_area.x, list_area.y, list_area.width - 1, rows),
                    Some(list_area.right() - 1),
                )
            } else {
                (list_area, None)
            };

        let hover_style = base.patch(self.options.hover_style);
        let selected_style = base.patch(theme.accent).patch(self.options.selected_style);
        let selected_value = self.select.selected().map(|o| o.value());

        for r in 0..rows {
            let idx = self.viewport.y as usize + r as usize;
            let Some(item) = self.list.items().get(idx) else {
                break;
            };
            let item_rect = Rect::new(content.x, content.y + r, content.width, 1);
            let style = if item.classes().contains(&names.item_hover) {
                hover_style
            } else if Some(item.value()) == selected_value {
                selected_style
            } else {
                base
            };
            render::clear_row(item_rect, buf, style);
            render::render_str_clipped(
                item_rect.x + 1,
                item_rect.y,
                item_rect.width.saturating_sub(1),
                buf,
                item.label(),
                style,
            );
            self.hit.items.push((idx, item_rect));
        }

        if let Some(sb_x) = scrollbar_x {
            self.render_scrollbar(Rect::new(sb_x, list_area.y, 1, rows), buf);
        }
        self.hit.list = list_area;
    }

    /// One-column track beside the list with a thumb sized to the visible share of items.
    fn render_scrollbar(&self, track: Rect, buf: &mut Buffer) {
        let rows = track.height as u32;
        let total = self.viewport.content_h.max(1);
        let thumb = (rows * rows / total).clamp(1, rows);
        let max_y = total.saturating_sub(rows);
        let top = if max_y == 0 {
            0
        } else {
            (self.viewport.y.min(max_y) * (rows - thumb) + max_y / 2) / max_y
        };
        let style = self.options.scrollbar_style;
        for dy in 0..rows {
            let glyph = if (top..top + thumb).contains(&dy) {
                "█"
            } else {
                "│"
            };
            render::render_str_clipped(track.x, track.y + dy as u16, 1, buf, glyph, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::DropdownAction;
    use crate::input::MouseEvent;
    use crate::input::MouseEventKind;
    use crate::native::NativeOption;
    use crate::native::NativeSelect;
    use crate::options::DropdownOptions;
    use ratatui::style::Modifier;

    fn select(n: usize) -> NativeSelect {
        let mut s = NativeSelect::new();
        for i in 0..n {
            s.push_option(NativeOption::new(format!("{i}"), format!("Item {i}")));
        }
        s
    }

    fn row(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn draw(d: &mut Dropdown, w: u16, h: u16) -> Buffer {
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        d.render(area, &mut buf, &Theme::default());
        buf
    }

    #[test]
    fn closed_renders_label_and_placeholder() {
        let mut d = Dropdown::from_parts("Size", select(3));
        let buf = draw(&mut d, 12, 4);
        assert_eq!(row(&buf, 0), "Size");
        assert_eq!(row(&buf, 1), " Select…   ▾");
        assert_eq!(row(&buf, 2), "");
        assert_eq!(d.desired_height(), 2);
    }

    #[test]
    fn open_renders_items_with_hover() {
        let mut s = select(3);
        s.select(1);
        let mut d = Dropdown::from_parts("Size", s);
        d.open();
        let buf = draw(&mut d, 12, 5);
        assert_eq!(row(&buf, 1), " Item 1    ▴");
        assert_eq!(row(&buf, 2), " Item 0");
        assert_eq!(row(&buf, 3), " Item 1");
        assert!(buf[(1, 3)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(1, 2)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn long_lists_scroll_to_keep_hover_visible() {
        let options = DropdownOptions {
            max_visible_items: 3,
            ..Default::default()
        };
        let mut d = Dropdown::from_parts_with_options("N", select(10), options);
        d.open();
        for _ in 0..6 {
            d.hover_next();
        }
        let buf = draw(&mut d, 12, 5);
        assert_eq!(d.hovered(), Some(5));
        assert_eq!(d.viewport.y, 3);
        assert!(row(&buf, 2).starts_with(" Item 3"));
        assert!(row(&buf, 4).starts_with(" Item 5"));
        assert_eq!(d.desired_height(), 5);
    }

    #[test]
    fn wheel_scroll_survives_redraw() {
        let options = DropdownOptions {
            max_visible_items: 3,
            ..Default::default()
        };
        let mut s = select(10);
        s.select(0);
        let mut d = Dropdown::from_parts_with_options("N", s, options);
        d.open();
        draw(&mut d, 12, 5);
        assert_eq!(d.viewport.y, 0);

        let down = MouseEvent::new(3, 3, MouseEventKind::ScrollDown);
        for _ in 0..3 {
            assert_eq!(d.handle_mouse(&down), DropdownAction::Redraw);
        }
        let buf = draw(&mut d, 12, 5);
        assert_eq!(d.viewport.y, 3);
        assert!(row(&buf, 2).starts_with(" Item 3"));
        assert_eq!(d.hovered(), Some(0));

        let up = MouseEvent::new(3, 3, MouseEventKind::ScrollUp);
        d.handle_mouse(&up);
        draw(&mut d, 12, 5);
        assert_eq!(d.viewport.y, 2);

        // Moving the hover brings it back into view.
        d.hover_next();
        draw(&mut d, 12, 5);
        assert_eq!(d.viewport.y, 1);
    }

    #[test]
    fn scrollbar_thumb_tracks_offset() {
        let options = DropdownOptions {
            max_visible_items: 3,
            ..Default::default()
        };
        let mut d = Dropdown::from_parts_with_options("N", select(9), options);
        d.open();
        let buf = draw(&mut d, 12, 5);
        assert_eq!(buf[(11, 2)].symbol(), "█");
        assert_eq!(buf[(11, 4)].symbol(), "│");

        d.viewport.scroll_y_by(6);
        let buf = draw(&mut d, 12, 5);
        assert_eq!(buf[(11, 2)].symbol(), "│");
        assert_eq!(buf[(11, 4)].symbol(), "█");
    }

    #[test]
    fn clicks_hit_rendered_items() {
        let mut d = Dropdown::from_parts("Size", select(3));
        d.handle_mouse(&MouseEvent::click(2, 1));
        assert!(!d.is_open(), "nothing rendered yet, click is outside");

        draw(&mut d, 12, 5);
        assert_eq!(
            d.handle_mouse(&MouseEvent::click(2, 1)),
            DropdownAction::Opened
        );
        draw(&mut d, 12, 5);
        assert_eq!(d.handle_mouse(&MouseEvent::moved(3, 4)), DropdownAction::Redraw);
        assert_eq!(d.hovered(), Some(2));
        assert_eq!(
            d.handle_mouse(&MouseEvent::click(3, 3)),
            DropdownAction::Committed(1)
        );
        assert!(!d.is_open());
        assert_eq!(d.value(), "1");
    }

    #[test]
    fn click_outside_closes() {
        let mut d = Dropdown::from_parts("Size", select(3));
        d.open();
        draw(&mut d, 12, 5);
        assert!(d.contains(0, 3));
        assert_eq!(
            d.handle_mouse(&MouseEvent::click(20, 20)),
            DropdownAction::Closed
        );
        assert_eq!(d.handle_mouse(&MouseEvent::click(20, 20)), DropdownAction::None);
    }

    #[test]
    fn invalid_trigger_uses_danger_style() {
        let mut d = Dropdown::from_parts("Size", select(2).with_required(true));
        assert!(!d.check_validity());
        let buf = draw(&mut d, 12, 2);
        let theme = Theme::default();
        assert_eq!(buf[(0, 0)].fg, theme.danger.fg.unwrap_or_default());
        assert_eq!(buf[(0, 1)].fg, theme.danger.fg.unwrap_or_default());
    }
}
