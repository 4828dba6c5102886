//! Scroll-triggered fade-in of content blocks.

use crate::page::outline::{Block, Outline};
use std::collections::HashMap;

/// Ticks a fade-in takes once triggered.
pub const FADE_TICKS: u64 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fade {
    Hidden,
    /// Fading in; the value runs from 0.0 to 1.0.
    Fading(f32),
    Shown,
}

/// Tracks which blocks have been revealed and when. Reveals are permanent.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed: HashMap<Block, u64>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(&mut self, block: Block, tick: u64) -> bool {
        if self.revealed.contains_key(&block) {
            return false;
        }
        self.revealed.insert(block, tick);
        true
    }

    pub fn is_revealed(&self, block: Block) -> bool {
        self.revealed.contains_key(&block)
    }

    /// Reveal every non-hero block that intersects the viewport. The bottom
    /// `margin` rows do not count, and at least a tenth of the block (one row
    /// minimum) must be inside. Returns how many blocks were newly revealed.
    pub fn observe(&mut self, outline: &Outline, top: usize, height: usize, margin: usize, tick: u64) -> usize {
        let bottom = top + height.saturating_sub(margin);
        let mut newly = 0;
        for (block, span) in &outline.blocks {
            if block.is_hero() || self.is_revealed(*block) {
                continue;
            }
            let visible = span.overlap(top, bottom);
            if visible > 0 && visible * 10 >= span.height {
                self.revealed.insert(*block, tick);
                newly += 1;
            }
        }
        newly
    }

    pub fn fade(&self, block: Block, tick: u64) -> Fade {
        match self.revealed.get(&block) {
            None => Fade::Hidden,
            Some(at) => {
                let elapsed = tick.saturating_sub(*at);
                if elapsed >= FADE_TICKS {
                    Fade::Shown
                } else {
                    Fade::Fading(elapsed as f32 / FADE_TICKS as f32)
                }
            }
        }
    }

    /// True while any block is mid-fade and the page needs redrawing.
    pub fn animating(&self, tick: u64) -> bool {
        self.revealed.values().any(|at| tick.saturating_sub(*at) < FADE_TICKS)
    }
}
