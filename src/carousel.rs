//! Scroll-position arithmetic for the project card strip
//!
//! The carousel tracks an offset in abstract scroll units where one card
//! occupies [`CARD_EXTENT`] units plus [`CARD_GAP`] of spacing. Arrow input
//! moves the offset by exactly one pitch, recovering the card index in view
//! by rounding the current offset. The scroll axis is picked once when the
//! carousel is built from the viewport width and is not re-evaluated on
//! resize.

/// Size of one card along the scroll axis, in scroll units
pub const CARD_EXTENT: u32 = 200;
/// Spacing between adjacent cards, in scroll units
pub const CARD_GAP: u32 = 20;
/// Terminals at least this wide scroll the card strip vertically
pub const WIDE_VIEWPORT_MIN_COLS: u16 = 120;

/// Axis the card strip scrolls along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Wide layout: cards stacked in a column
    Vertical,
    /// Narrow layout: cards laid out in a row
    Horizontal,
}

/// Direction of one arrow press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Back,
    Forward,
}

impl ScrollDirection {
    fn delta(self) -> i64 {
        match self {
            ScrollDirection::Back => -1,
            ScrollDirection::Forward => 1,
        }
    }
}

/// Carousel over the ordered card strip
///
/// `target` is the committed scroll offset; `shown` trails it a little each
/// frame so arrow presses animate instead of jumping.
#[derive(Debug, Clone)]
pub struct Carousel {
    axis: Axis,
    target: u32,
    shown: f32,
}

impl Carousel {
    /// Card size plus spacing: the distance between adjacent card origins
    pub fn pitch() -> u32 {
        CARD_EXTENT + CARD_GAP
    }

    /// Build a carousel, fixing the scroll axis from the viewport width
    pub fn new(viewport_cols: u16) -> Self {
        let axis = if viewport_cols >= WIDE_VIEWPORT_MIN_COLS {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        Self {
            axis,
            target: 0,
            shown: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Committed scroll offset in scroll units
    pub fn offset(&self) -> u32 {
        self.target
    }

    /// Index of the card nearest the committed offset
    pub fn index_in_view(&self) -> usize {
        let pitch = f64::from(Self::pitch());
        (f64::from(self.target) / pitch).round() as usize
    }

    /// Move one card in the given direction
    ///
    /// Moving back from the first card clamps the offset at zero. There is
    /// no clamp at the high end; the view clamps what it can actually show,
    /// the way native scrolling would.
    pub fn nudge(&mut self, direction: ScrollDirection) {
        let index = self.index_in_view() as i64;
        let new_offset = if direction == ScrollDirection::Back && index == 0 {
            0
        } else {
            (index + direction.delta()) * i64::from(Self::pitch())
        };
        self.target = new_offset as u32;
    }

    /// Ease the shown offset toward the target; returns true while animating
    pub fn tick(&mut self) -> bool {
        let target = self.target as f32;
        let remaining = target - self.shown;
        if remaining.abs() < 0.5 {
            self.shown = target;
            return false;
        }
        self.shown += remaining * 0.35;
        true
    }

    /// First card index the view should display this frame
    ///
    /// Clamped against the card count, standing in for the browser's native
    /// clamp when the offset runs past the last item.
    pub fn displayed_index(&self, card_count: usize) -> usize {
        let index = (self.shown / Self::pitch() as f32).round().max(0.0) as usize;
        index.min(card_count.saturating_sub(1))
    }
}
