use crate::format::format_label;
use crate::geometry::{
    self, CAPTION_BASELINE_Y, CAPTION_X, CONTINUATION_BASELINE_Y, TEXT_BASELINE_Y, TEXT_X,
};
use crate::model::{PrintUnit, RenderedBox, Selection, Sheet, SheetPage, Slot};
use crate::paginate::paginate;

/// Resolve one placed unit into absolute drawing coordinates.
pub fn resolve_box(unit: PrintUnit<'_>, slot: Slot) -> RenderedBox {
    let origin = geometry::box_origin(slot);
    let content = format_label(unit.item, unit.copy_index);
    let continuation_origin = (!content.remaining_desc.is_empty())
        .then(|| origin.offset(TEXT_X, CONTINUATION_BASELINE_Y));

    RenderedBox {
        slot,
        outline: geometry::box_outline(origin),
        dividers: geometry::box_dividers(origin),
        barcode: geometry::barcode_slot(origin),
        main_text_origin: origin.offset(TEXT_X, TEXT_BASELINE_Y),
        continuation_origin,
        caption_origin: origin.offset(CAPTION_X, CAPTION_BASELINE_Y),
        content,
    }
}

/// Paginate `selections` and resolve every box. Pure: no encoding, no I/O.
pub fn layout_sheet(selections: &[Selection]) -> Sheet {
    let (placed, total_pages) = paginate(selections);
    let mut pages: Vec<SheetPage> = Vec::with_capacity(total_pages as usize);

    for (unit, placement) in placed {
        if placement.starts_page {
            log::debug!("Opening page {}", placement.slot.page);
            pages.push(SheetPage {
                number: placement.slot.page,
                boxes: Vec::new(),
            });
        }
        let rendered = resolve_box(unit, placement.slot);
        if let Some(page) = pages.last_mut() {
            page.boxes.push(rendered);
        }
    }

    Sheet { pages }
}
