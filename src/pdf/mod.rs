mod fonts;

use pdf_writer::{Content, Filter, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use crate::barcode::BarcodeEncoder;
use crate::error::Error;
use crate::geometry::{
    self, CAPTION_FONT_SIZE, Line, MAIN_FONT_SIZE, PAGE_HEIGHT, PAGE_WIDTH, Point, Rect,
};
use crate::model::{RenderedBox, Sheet};

use fonts::{FontEntry, register_helvetica, to_winansi_bytes};

/// Stroke width of box outlines and dividers, in mm.
const RULE_WIDTH: f32 = 0.2;

/// One drawing primitive, in page millimetres. Text carries its own font size so
/// no primitive depends on state left behind by an earlier one.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect(Rect),
    Line(Line),
    Text {
        origin: Point,
        font_size: f32,
        text: String,
    },
    Barcode {
        area: Rect,
        payload: String,
    },
}

pub struct PageOps {
    pub number: u32,
    pub ops: Vec<DrawOp>,
}

/// Primitives for one label: barcode, outline, dividers, main block,
/// continuation line, then the product-id caption.
pub fn box_ops(rendered: &RenderedBox) -> Vec<DrawOp> {
    let content = &rendered.content;
    let mut ops = vec![
        DrawOp::Barcode {
            area: rendered.barcode,
            payload: content.barcode_payload.clone(),
        },
        DrawOp::Rect(rendered.outline),
    ];
    ops.extend(rendered.dividers.iter().copied().map(DrawOp::Line));

    let advance = geometry::line_advance(MAIN_FONT_SIZE);
    for (i, line) in content.main_text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        ops.push(DrawOp::Text {
            origin: rendered.main_text_origin.offset(0.0, i as f32 * advance),
            font_size: MAIN_FONT_SIZE,
            text: line.to_string(),
        });
    }

    if let Some(origin) = rendered.continuation_origin {
        ops.push(DrawOp::Text {
            origin,
            font_size: MAIN_FONT_SIZE,
            text: content.remaining_desc.clone(),
        });
    }

    ops.push(DrawOp::Text {
        origin: rendered.caption_origin,
        font_size: CAPTION_FONT_SIZE,
        text: content.caption.clone(),
    });
    ops
}

/// The complete display list of a sheet, page by page.
pub fn display_list(sheet: &Sheet) -> Vec<PageOps> {
    sheet
        .pages
        .iter()
        .map(|page| PageOps {
            number: page.number,
            ops: page.boxes.iter().flat_map(box_ops).collect(),
        })
        .collect()
}

fn x_pt(x: f32) -> f32 {
    geometry::mm_to_pt(x)
}

/// PDF space has its origin at the bottom-left corner.
fn y_pt(y: f32) -> f32 {
    geometry::mm_to_pt(PAGE_HEIGHT - y)
}

/// Decode the encoder's PNG output into a grayscale image XObject.
fn embed_barcode(pdf: &mut Pdf, xobj_ref: Ref, png: &[u8]) -> Result<(), Error> {
    let decoded = image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .map_err(|e| Error::Pdf(format!("barcode image: {e}")))?;
    let gray = decoded.to_luma8();
    let (w, h) = (gray.width(), gray.height());
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(gray.as_raw(), 6);

    let mut xobj = pdf.image_xobject(xobj_ref, &compressed);
    xobj.filter(Filter::FlateDecode);
    xobj.width(w as i32);
    xobj.height(h as i32);
    xobj.color_space().device_gray();
    xobj.bits_per_component(8);
    Ok(())
}

/// Serialize a laid-out sheet to PDF bytes. Every barcode is encoded here; the
/// first encoder or image failure aborts the whole document.
pub fn render(sheet: &Sheet, encoder: &dyn BarcodeEncoder) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();
    let font: FontEntry = register_helvetica(&mut pdf, "F1", &mut alloc);

    let mut all_contents: Vec<Content> = Vec::with_capacity(sheet.pages.len());
    let mut page_images: Vec<Vec<(String, Ref)>> = Vec::with_capacity(sheet.pages.len());
    let mut image_count = 0usize;
    let mut t_encode = std::time::Duration::ZERO;

    for page in display_list(sheet) {
        let mut content = Content::new();
        let mut images: Vec<(String, Ref)> = Vec::new();
        content.set_line_width(geometry::mm_to_pt(RULE_WIDTH));

        for op in &page.ops {
            match op {
                DrawOp::Rect(r) => {
                    content
                        .rect(x_pt(r.x), y_pt(r.bottom()), x_pt(r.width), x_pt(r.height))
                        .stroke();
                }
                DrawOp::Line(l) => {
                    content.move_to(x_pt(l.from.x), y_pt(l.from.y));
                    content.line_to(x_pt(l.to.x), y_pt(l.to.y));
                    content.stroke();
                }
                DrawOp::Text {
                    origin,
                    font_size,
                    text,
                } => {
                    let text_bytes = to_winansi_bytes(text);
                    content
                        .begin_text()
                        .set_font(Name(font.pdf_name.as_bytes()), *font_size)
                        .next_line(x_pt(origin.x), y_pt(origin.y))
                        .show(Str(&text_bytes))
                        .end_text();
                }
                DrawOp::Barcode { area, payload } => {
                    let t_enc = std::time::Instant::now();
                    let png = encoder.encode(payload)?;
                    t_encode += t_enc.elapsed();

                    let xobj_ref = alloc();
                    embed_barcode(&mut pdf, xobj_ref, &png)?;
                    image_count += 1;
                    let pdf_name = format!("Im{image_count}");

                    content.save_state();
                    content.transform([
                        x_pt(area.width),
                        0.0,
                        0.0,
                        x_pt(area.height),
                        x_pt(area.x),
                        y_pt(area.bottom()),
                    ]);
                    content.x_object(Name(pdf_name.as_bytes()));
                    content.restore_state();
                    images.push((pdf_name, xobj_ref));
                }
            }
        }

        log::debug!(
            "Page {}: {} primitives, {} barcodes",
            page.number,
            page.ops.len(),
            images.len()
        );
        all_contents.push(content);
        page_images.push(images);
    }

    let t_draw = t0.elapsed();

    let n = all_contents.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, c) in all_contents.into_iter().enumerate() {
        let raw = c.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);
    pdf.document_info(info_id)
        .title(TextStr("Shelf edge labels"))
        .producer(TextStr("sel-printer"));

    let media_box = PdfRect::new(0.0, 0.0, x_pt(PAGE_WIDTH), x_pt(PAGE_HEIGHT));
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        resources
            .fonts()
            .pair(Name(font.pdf_name.as_bytes()), font.font_ref);
        if !page_images[i].is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, xobj_ref) in &page_images[i] {
                xobjects.pair(Name(name.as_bytes()), *xobj_ref);
            }
        }
    }

    log::info!(
        "Render phases: draw={:.1}ms (barcodes={:.1}ms), assembly={:.1}ms, pages={n}, barcodes={image_count}",
        t_draw.as_secs_f64() * 1000.0,
        t_encode.as_secs_f64() * 1000.0,
        (t0.elapsed() - t_draw).as_secs_f64() * 1000.0,
    );

    Ok(pdf.finish())
}
