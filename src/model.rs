use serde::Deserialize;

use crate::catalog::{optional_text, text};
use crate::geometry::{Line, Point, Rect};

/// One catalog entry. Read-only input to a generation run.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "text")]
    pub product_id: String,
    #[serde(default, deserialize_with = "text")]
    pub product_name: String,
    #[serde(default, deserialize_with = "text")]
    pub product_desc: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub mrp: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub rrp: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub min_qty: Option<String>,
    /// Print status: "P" (printed) or "NP" (not printed).
    #[serde(default, deserialize_with = "optional_text")]
    pub flag: Option<String>,
}

/// An item paired with a validated print quantity (always >= 1).
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub item: Item,
    quantity: u32,
}

impl Selection {
    pub fn new(item: Item, quantity: u32) -> Option<Self> {
        (quantity >= 1).then_some(Self { item, quantity })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// One physical label: an item reference plus its 1-based copy index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrintUnit<'a> {
    pub item: &'a Item,
    pub copy_index: u32,
}

/// Grid address of one box. Pages are 1-based, rows and columns 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub page: u32,
    pub row: usize,
    pub column: usize,
}

/// Formatted text and barcode payload for one label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelContent {
    pub barcode_payload: String,
    pub truncated_desc: String,
    /// Description text past the truncation point; empty when it fits on one line.
    pub remaining_desc: String,
    pub main_text: String,
    pub caption: String,
}

/// Fully resolved drawing instructions for one slot, in page millimetres.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedBox {
    pub slot: Slot,
    pub outline: Rect,
    pub dividers: [Line; 3],
    pub barcode: Rect,
    pub main_text_origin: Point,
    /// Set only when the description spills onto a second line.
    pub continuation_origin: Option<Point>,
    pub caption_origin: Point,
    pub content: LabelContent,
}

pub struct SheetPage {
    pub number: u32,
    pub boxes: Vec<RenderedBox>,
}

/// Output of layout: every box grouped by page, in placement order.
pub struct Sheet {
    pub pages: Vec<SheetPage>,
}

impl Sheet {
    pub fn total_pages(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn total_boxes(&self) -> usize {
        self.pages.iter().map(|p| p.boxes.len()).sum()
    }

    pub fn boxes(&self) -> impl Iterator<Item = &RenderedBox> {
        self.pages.iter().flat_map(|p| p.boxes.iter())
    }
}
