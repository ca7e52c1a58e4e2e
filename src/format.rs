//! Per-label text: description split, the price/quantity block and the barcode payload.

use crate::model::{Item, LabelContent};

/// Characters of the description that fit on the first text line.
pub const MAX_DESC_LEN: usize = 22;

const PRICE_GAP: usize = 24;
const ROW_INDENT: usize = 17;
const BUY_GAP: usize = 19;
const BUY_QTY_GAP: usize = 22;
const PRICE_LABEL_GAP: usize = 10;
const PRICE_VALUE_GAP: usize = 13;
/// Blank lines between the description line and the BUY row.
const BLANK_LINES: usize = 2;

/// Split `desc` after `MAX_DESC_LEN` chars. The second half is empty when the whole
/// description fits.
pub fn split_description(desc: &str) -> (&str, &str) {
    match desc.char_indices().nth(MAX_DESC_LEN) {
        Some((byte_idx, _)) => desc.split_at(byte_idx),
        None => (desc, ""),
    }
}

pub fn barcode_payload(item: &Item, copy_index: u32) -> String {
    format!("{}-{copy_index}", item.product_desc)
}

/// Compose the five-line main block: description and MRP, two blank lines, then
/// the BUY and PRICE rows. Missing prices render blank.
pub fn main_text_block(truncated_desc: &str, item: &Item) -> String {
    let mrp = item.mrp.as_deref().unwrap_or("");
    let rrp = item.rrp.as_deref().unwrap_or("");
    let min_qty = item.min_qty.as_deref().unwrap_or("");
    let indent = " ".repeat(ROW_INDENT);

    let mut lines = Vec::with_capacity(3 + BLANK_LINES);
    lines.push(format!("{truncated_desc}{}MRP:{mrp}", " ".repeat(PRICE_GAP)));
    lines.extend(std::iter::repeat_n(String::new(), BLANK_LINES));
    lines.push(format!(
        "{indent}BUY{}1{}{min_qty}",
        " ".repeat(BUY_GAP),
        " ".repeat(BUY_QTY_GAP)
    ));
    lines.push(format!(
        "{indent}PRICE{}{mrp}{}{rrp} ",
        " ".repeat(PRICE_LABEL_GAP),
        " ".repeat(PRICE_VALUE_GAP)
    ));
    lines.join("\n")
}

pub fn format_label(item: &Item, copy_index: u32) -> LabelContent {
    let (truncated, remaining) = split_description(&item.product_desc);
    LabelContent {
        barcode_payload: barcode_payload(item, copy_index),
        truncated_desc: truncated.to_string(),
        remaining_desc: remaining.to_string(),
        main_text: main_text_block(truncated, item),
        caption: item.product_id.clone(),
    }
}
