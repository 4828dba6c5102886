//! Scroll position of the page viewport, with smooth scrolling.

/// Fraction of the remaining distance covered per tick.
const SMOOTH_DIVISOR: usize = 4;

#[derive(Debug, Clone)]
pub struct Viewport {
    pub y: usize,
    pub height: usize,
    pub doc_height: usize,
    target: Option<usize>,
}

impl Viewport {
    pub fn new(doc_height: usize) -> Self {
        Self {
            y: 0,
            height: 0,
            doc_height,
            target: None,
        }
    }

    pub fn max_y(&self) -> usize {
        self.doc_height.saturating_sub(self.height)
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.y = self.y.min(self.max_y());
        if let Some(t) = self.target {
            self.target = Some(t.min(self.max_y()));
        }
    }

    /// Immediate relative scroll. Cancels any smooth scroll in progress.
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        let y = if delta < 0 {
            self.y.saturating_sub(delta.unsigned_abs())
        } else {
            self.y.saturating_add(delta as usize)
        };
        self.y = y.min(self.max_y());
    }

    pub fn jump_to(&mut self, y: usize) {
        self.target = None;
        self.y = y.min(self.max_y());
    }

    /// Start a smooth scroll toward `y`; [`Viewport::step`] moves it.
    pub fn smooth_to(&mut self, y: usize) {
        self.target = Some(y.min(self.max_y()));
    }

    /// Advance a smooth scroll by one tick. Returns true if `y` moved.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let before = self.y;
        let distance = target.abs_diff(self.y);
        let stride = (distance / SMOOTH_DIVISOR).max(1).min(distance);
        if target > self.y {
            self.y += stride;
        } else {
            self.y -= stride;
        }
        if self.y == target {
            self.target = None;
        }
        self.y != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        let mut vp = Viewport::new(200);
        vp.set_height(40);
        vp
    }

    #[test]
    fn test_smooth_scroll_arrives_exactly() {
        let mut vp = viewport();
        vp.smooth_to(97);
        let mut steps = 0;
        while vp.step() {
            steps += 1;
            assert!(steps < 100, "smooth scroll never settled");
        }
        assert_eq!(vp.y, 97);
        assert!(vp.target().is_none());
        assert!(steps > 1);
    }

    #[test]
    fn test_smooth_scroll_upward() {
        let mut vp = viewport();
        vp.jump_to(120);
        vp.smooth_to(3);
        while vp.step() {}
        assert_eq!(vp.y, 3);
    }

    #[test]
    fn test_targets_clamp_to_document() {
        let mut vp = viewport();
        vp.smooth_to(500);
        assert_eq!(vp.target(), Some(160));
        vp.scroll_by(-10);
        assert_eq!(vp.y, 0);
        assert!(vp.target().is_none());
        vp.scroll_by(1000);
        assert_eq!(vp.y, 160);
    }

    #[test]
    fn test_shrinking_document_view_clamps_position() {
        let mut vp = viewport();
        vp.jump_to(160);
        vp.set_height(100);
        assert_eq!(vp.y, 100);
    }
}
