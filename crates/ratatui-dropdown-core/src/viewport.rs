/// Vertical scroll state for the open list.
///
/// The list only clips to `viewport_h` rows; every item is still a plain row.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportState {
    pub y: u32,
    pub viewport_h: u16,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, h: u16) {
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, h: u32) {
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.min(self.max_y());
    }

    pub fn scroll_y_by(&mut self, delta: i32) {
        let next = self.y as i64 + delta as i64;
        self.y = next.clamp(0, self.max_y() as i64) as u32;
    }

    pub fn to_top(&mut self) {
        self.y = 0;
    }

    /// Scrolls the minimum amount needed for row `idx` to be visible.
    pub fn ensure_visible(&mut self, idx: u32) {
        let h = self.viewport_h as u32;
        if h == 0 {
            return;
        }
        if idx < self.y {
            self.y = idx;
        } else if idx >= self.y + h {
            self.y = idx + 1 - h;
        }
        self.clamp();
    }

    pub fn overflows(&self) -> bool {
        self.content_h > self.viewport_h as u32
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }
}
