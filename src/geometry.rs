//! Fixed sheet geometry. All lengths are millimetres measured from the top-left
//! corner of the page, y growing downwards. Nothing here depends on label content,
//! so every box on every page has identical rulings.

use crate::model::Slot;

/// A4 landscape.
pub const PAGE_WIDTH: f32 = 297.0;
pub const PAGE_HEIGHT: f32 = 210.0;

pub const COLUMNS_PER_PAGE: usize = 2;
pub const ROWS_PER_PAGE: usize = 5;
pub const BOXES_PER_PAGE: usize = COLUMNS_PER_PAGE * ROWS_PER_PAGE;

pub const BOX_WIDTH: f32 = 140.0;
pub const BOX_HEIGHT: f32 = 35.0;

/// Gap between boxes. Negative vertical spacing makes adjacent rows overlap.
pub const SPACING_X: f32 = 5.0;
pub const SPACING_Y: f32 = -5.0;

/// Top-left corner of the first box on every page.
pub const GRID_ORIGIN_X: f32 = 5.0;
pub const GRID_ORIGIN_Y: f32 = 5.0;

// Offsets inside a box, relative to its top-left corner.
pub const DIVIDER_Y: f32 = 19.0;
pub const BARCODE_RULE_Y: f32 = 27.0;
pub const STUB_WIDTH: f32 = 29.0;

pub const BARCODE_X: f32 = 5.0;
pub const BARCODE_Y: f32 = 21.0;
pub const BARCODE_WIDTH: f32 = 20.0;
pub const BARCODE_HEIGHT: f32 = 5.0;

pub const TEXT_X: f32 = 5.0;
pub const TEXT_BASELINE_Y: f32 = 7.0;
/// Baseline of the description continuation line.
pub const CONTINUATION_BASELINE_Y: f32 = 10.0 + CONTINUATION_SHIFT;
pub const CONTINUATION_SHIFT: f32 = 5.0;

pub const CAPTION_X: f32 = 3.0;
pub const CAPTION_BASELINE_Y: f32 = 32.0;

/// Font sizes in points.
pub const MAIN_FONT_SIZE: f32 = 15.0;
pub const CAPTION_FONT_SIZE: f32 = 10.0;
/// Line advance of multi-line text as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

pub const MM_TO_PT: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the two rectangles share interior area on the x axis.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

/// Top-left corner of the box occupying `slot`.
pub fn box_origin(slot: Slot) -> Point {
    Point {
        x: GRID_ORIGIN_X + slot.column as f32 * (BOX_WIDTH + SPACING_X),
        y: GRID_ORIGIN_Y + slot.row as f32 * (BOX_HEIGHT + SPACING_Y),
    }
}

pub fn box_outline(origin: Point) -> Rect {
    Rect {
        x: origin.x,
        y: origin.y,
        width: BOX_WIDTH,
        height: BOX_HEIGHT,
    }
}

/// Full-width divider, the short rule under the barcode, and the stub's right edge.
pub fn box_dividers(origin: Point) -> [Line; 3] {
    [
        Line {
            from: origin.offset(0.0, DIVIDER_Y),
            to: origin.offset(BOX_WIDTH, DIVIDER_Y),
        },
        Line {
            from: origin.offset(0.0, BARCODE_RULE_Y),
            to: origin.offset(STUB_WIDTH, BARCODE_RULE_Y),
        },
        Line {
            from: origin.offset(STUB_WIDTH, DIVIDER_Y),
            to: origin.offset(STUB_WIDTH, BOX_HEIGHT),
        },
    ]
}

pub fn barcode_slot(origin: Point) -> Rect {
    Rect {
        x: origin.x + BARCODE_X,
        y: origin.y + BARCODE_Y,
        width: BARCODE_WIDTH,
        height: BARCODE_HEIGHT,
    }
}

/// Distance between consecutive baselines for text at `font_size` points, in mm.
pub fn line_advance(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR / MM_TO_PT
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}
